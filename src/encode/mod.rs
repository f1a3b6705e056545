//! Conversion of a selected icon into a self-contained data URI.

mod worker;

use std::io;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

pub use worker::{EncodeResult, EncodeWorker};

use crate::catalog::Icon;

/// Why an icon could not be turned into a [`SelectionResult`].
#[derive(Debug, Error)]
pub enum EncodeError {
	/// The resource bytes could not be read.
	#[error("failed to read icon '{name}': {source}")]
	Read {
		name: String,
		#[source]
		source: io::Error,
	},

	/// The resource has no known MIME type.
	#[error("icon '{name}' has an unsupported file type")]
	UnsupportedType { name: String },

	/// The background encoder is gone.
	#[error("the icon encoder is not running")]
	WorkerUnavailable,
}

/// The portable payload handed to the host for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
	/// Display name of the selected icon.
	pub name: String,
	/// `data:<mime>;base64,<bytes>`.
	pub data_uri: String,
}

impl SelectionResult {
	pub fn into_data_uri(self) -> String {
		self.data_uri
	}
}

/// Read `icon` and encode it as a base64 data URI.
pub fn encode(icon: &Icon) -> Result<SelectionResult, EncodeError> {
	let media_type = icon
		.media_type()
		.ok_or_else(|| EncodeError::UnsupportedType {
			name: icon.name().to_string(),
		})?;
	let bytes = icon.resource().read().map_err(|source| EncodeError::Read {
		name: icon.name().to_string(),
		source,
	})?;
	Ok(SelectionResult {
		name: icon.name().to_string(),
		data_uri: data_uri(media_type, &bytes),
	})
}

/// Format `bytes` as a standard base64 data URI.
pub fn data_uri(media_type: &str, bytes: &[u8]) -> String {
	format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}
