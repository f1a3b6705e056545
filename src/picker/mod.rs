//! The picker state machine tying search, windowing and encoding together.
//!
//! ```text
//! Closed ──open──▶ Open ──select──▶ Selecting ──ok──▶ Closed
//!    ▲              │  ▲                │
//!    └────close─────┘  └─────error──────┘
//! ```
//!
//! The host owns visibility and receives the final payload through
//! [`PickerHost`]. Every transition into `Closed` clears the query and
//! restores the full catalog, so nothing stale survives a reopen.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::catalog::AssetIndex;
use crate::encode::{EncodeError, EncodeResult, EncodeWorker, SelectionResult};
use crate::search::{FilterOutcome, FilteredView, SearchFilterEngine};

/// Callbacks from the picker into its host.
pub trait PickerHost {
	/// An icon was chosen and encoded.
	fn on_icon_click(&mut self, selection: SelectionResult);

	/// The picker closed itself, after a selection or a cancel.
	fn on_close(&mut self);

	/// Encoding the chosen icon failed. The picker stays open.
	fn on_error(&mut self, error: &EncodeError);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
	Closed,
	Open,
	/// Open, with an encode in flight.
	Selecting,
}

#[derive(Debug)]
struct PendingSelection {
	id: u64,
	name: String,
}

pub struct PickerController<H> {
	host: H,
	search: SearchFilterEngine,
	encoder: EncodeWorker,
	open: bool,
	selecting: Option<PendingSelection>,
	next_request_id: u64,
}

impl<H: PickerHost> PickerController<H> {
	/// Create a closed picker over `index`. Spawns the encoder thread.
	pub fn new(index: Arc<AssetIndex>, host: H) -> io::Result<Self> {
		Ok(Self {
			host,
			search: SearchFilterEngine::new(index),
			encoder: EncodeWorker::spawn()?,
			open: false,
			selecting: None,
			next_request_id: 0,
		})
	}

	/// Number of index entries filtered per [`pump_filter`](Self::pump_filter).
	#[must_use]
	pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
		self.search = self.search.with_chunk_size(chunk_size);
		self
	}

	pub fn state(&self) -> PickerState {
		match (self.open, &self.selecting) {
			(false, _) => PickerState::Closed,
			(true, None) => PickerState::Open,
			(true, Some(_)) => PickerState::Selecting,
		}
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Show the picker with an empty query and the full catalog.
	pub fn open(&mut self) {
		if self.open {
			return;
		}
		self.reset();
		self.open = true;
		log::debug!("picker opened with {} icons", self.search.index().len());
	}

	/// Follow the host's visibility flag. Hiding this way does not call
	/// [`PickerHost::on_close`], since the host initiated it.
	pub fn set_open(&mut self, open: bool) {
		if open {
			self.open();
		} else if self.open {
			self.open = false;
			self.reset();
			log::debug!("picker hidden by host");
		}
	}

	/// Cancel: reset and close, notifying the host.
	///
	/// An encode still in flight finishes on the worker, but its result is
	/// dropped.
	pub fn close(&mut self) {
		if !self.open {
			return;
		}
		if let Some(pending) = &self.selecting {
			log::debug!(
				"closing with encode of '{}' in flight; its result will be dropped",
				pending.name
			);
		}
		self.open = false;
		self.reset();
		self.host.on_close();
	}

	/// Forward a keystroke's resulting query to the filter engine.
	pub fn on_query_change(&mut self, query: impl Into<String>) {
		if !self.open {
			return;
		}
		self.search.on_query_change(query);
	}

	pub fn query(&self) -> &str {
		self.search.query()
	}

	pub fn search(&self) -> &SearchFilterEngine {
		&self.search
	}

	/// The view currently on screen.
	pub fn view(&self) -> &FilteredView {
		self.search.view()
	}

	pub fn outcome(&self) -> FilterOutcome<'_> {
		self.search.outcome()
	}

	/// Run one chunk of deferred filtering. Returns `true` when the visible
	/// view changed.
	pub fn pump_filter(&mut self) -> bool {
		self.search.pump()
	}

	/// Finish any deferred filtering immediately.
	pub fn flush_filter(&mut self) -> bool {
		self.search.flush()
	}

	/// Name of the icon being encoded, if any.
	pub fn pending_selection(&self) -> Option<&str> {
		self.selecting.as_ref().map(|pending| pending.name.as_str())
	}

	/// Start encoding the icon at `position` in the visible view.
	///
	/// A newer selection supersedes one still in flight. Returns `false` when
	/// nothing was started.
	pub fn select(&mut self, position: usize) -> bool {
		if !self.open {
			return false;
		}
		let Some(icon) = self.search.view().get(position).cloned() else {
			return false;
		};

		self.next_request_id = self.next_request_id.wrapping_add(1);
		let id = self.next_request_id;
		let name = icon.name().to_string();
		log::debug!("encoding '{name}' (request {id})");

		if let Err(err) = self.encoder.submit(id, icon) {
			log::error!("could not queue '{name}' for encoding: {err}");
			self.selecting = None;
			self.host.on_error(&err);
			return false;
		}
		self.selecting = Some(PendingSelection { id, name });
		true
	}

	/// Apply any finished encode results without blocking.
	pub fn pump_encode(&mut self) {
		while let Ok(result) = self.encoder.try_recv() {
			self.handle_encode_result(result);
		}
	}

	/// Block until the pending selection resolves or `timeout` elapses.
	///
	/// Returns `true` when nothing is left in flight.
	pub fn wait_for_encode(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		while self.selecting.is_some() {
			let remaining = deadline.saturating_duration_since(Instant::now());
			match self.encoder.recv_timeout(remaining) {
				Ok(result) => self.handle_encode_result(result),
				Err(_) => return false,
			}
		}
		true
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	pub fn into_host(self) -> H {
		self.host
	}

	fn handle_encode_result(&mut self, result: EncodeResult) {
		let is_current = self
			.selecting
			.as_ref()
			.is_some_and(|pending| pending.id == result.id);
		if !is_current {
			log::trace!("dropping encode result for superseded request {}", result.id);
			return;
		}
		self.selecting = None;

		match result.outcome {
			Ok(selection) => {
				log::info!("selected icon '{}'", selection.name);
				self.host.on_icon_click(selection);
				self.close();
			}
			Err(err) => {
				log::error!("{err}");
				self.host.on_error(&err);
			}
		}
	}

	fn reset(&mut self) {
		self.selecting = None;
		self.search.reset();
	}
}

#[cfg(test)]
mod tests;
