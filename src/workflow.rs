use std::sync::Arc;

use anyhow::{Context, Result};
use iconpick::{AssetIndex, PickerOutcome, UiOptions};

use crate::settings::ResolvedConfig;

/// Builds the catalog described by the configuration and runs the picker
/// over it.
pub(crate) struct PickerWorkflow {
	index: Arc<AssetIndex>,
	options: UiOptions,
}

impl PickerWorkflow {
	/// Discovery failures leave an empty catalog; the picker then shows its
	/// no-results state and the failure is in the log drawer.
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let source = config.asset_source();
		let index = AssetIndex::build_or_empty(source.as_ref());
		Self {
			index: Arc::new(index),
			options: config.ui,
		}
	}

	/// Like [`from_config`](Self::from_config), but discovery failures are
	/// errors.
	pub(crate) fn strict(config: ResolvedConfig) -> Result<Self> {
		let source = config.asset_source();
		let index = AssetIndex::build(source.as_ref()).context("failed to load icons")?;
		Ok(Self {
			index: Arc::new(index),
			options: config.ui,
		})
	}

	pub(crate) fn names(&self) -> Vec<&str> {
		self.index.names()
	}

	pub(crate) fn run(self) -> Result<PickerOutcome> {
		iconpick::run(self.index, self.options)
	}
}
