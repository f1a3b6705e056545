//! Deferred query filtering keyed by query version.
//!
//! The engine updates the query synchronously and schedules the actual filter
//! as a [`FilterTask`] that the host advances in small chunks between input
//! events. A newer query drops the running task, and a finished task only
//! commits while its version is still the latest one, so views are applied
//! in query-recency order.

use std::sync::Arc;

use super::DEFAULT_CHUNK_SIZE;
use super::task::FilterTask;
use super::view::FilteredView;
use crate::catalog::AssetIndex;

/// What the engine can report about the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome<'a> {
	/// The current query has not finished filtering yet.
	Pending,
	/// The current query finished and matched nothing.
	NoResults,
	/// The current query finished with at least one match.
	Matches(&'a FilteredView),
}

struct Committed {
	version: u64,
	view: FilteredView,
}

/// Cooperative filter engine over a shared [`AssetIndex`].
pub struct SearchFilterEngine {
	index: Arc<AssetIndex>,
	query: String,
	version: u64,
	committed: Committed,
	pending: Option<FilterTask>,
	chunk_size: usize,
}

impl SearchFilterEngine {
	pub fn new(index: Arc<AssetIndex>) -> Self {
		let view = FilteredView::full(Arc::clone(&index));
		Self {
			index,
			query: String::new(),
			version: 0,
			committed: Committed { version: 0, view },
			pending: None,
			chunk_size: DEFAULT_CHUNK_SIZE,
		}
	}

	/// Set how many index entries a single [`pump`](Self::pump) visits.
	#[must_use]
	pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
		self.chunk_size = chunk_size.max(1);
		self
	}

	pub fn index(&self) -> &Arc<AssetIndex> {
		&self.index
	}

	/// The most recent query, updated synchronously on every change.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Version of the most recent query.
	pub fn version(&self) -> u64 {
		self.version
	}

	/// Whether a filter is scheduled for the current query.
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// The last committed view. While a filter is pending this is the view of
	/// an earlier query and stays on screen until the new one is ready.
	pub fn view(&self) -> &FilteredView {
		&self.committed.view
	}

	pub fn outcome(&self) -> FilterOutcome<'_> {
		if self.pending.is_some() || self.committed.version != self.version {
			FilterOutcome::Pending
		} else if self.committed.view.is_empty() {
			FilterOutcome::NoResults
		} else {
			FilterOutcome::Matches(&self.committed.view)
		}
	}

	/// Record a new query and schedule filtering for it.
	///
	/// An empty query commits the full index right away.
	pub fn on_query_change(&mut self, query: impl Into<String>) {
		self.query = query.into();
		self.version = self.version.wrapping_add(1);

		if let Some(stale) = self.pending.take() {
			log::trace!("cancelled filter for query version {}", stale.version());
		}

		if self.query.is_empty() {
			let view = FilteredView::full(Arc::clone(&self.index));
			self.commit(self.version, view);
			return;
		}

		log::debug!(
			"scheduled filter for {:?} (version {})",
			self.query,
			self.version
		);
		self.pending = Some(FilterTask::new(self.version, &self.query));
	}

	/// Advance the pending filter by one chunk.
	///
	/// Returns `true` when this call committed a new view.
	pub fn pump(&mut self) -> bool {
		let Some(task) = self.pending.as_mut() else {
			return false;
		};
		if !task.step(&self.index, self.chunk_size) {
			return false;
		}
		match self.pending.take() {
			Some(task) => self.complete(task),
			None => false,
		}
	}

	/// Run the pending filter to completion.
	///
	/// Returns `true` when a new view was committed.
	pub fn flush(&mut self) -> bool {
		while self.pending.is_some() {
			if self.pump() {
				return true;
			}
		}
		false
	}

	/// Clear the query and restore the full catalog.
	pub fn reset(&mut self) {
		self.on_query_change(String::new());
	}

	fn complete(&mut self, task: FilterTask) -> bool {
		let version = task.version();
		if version != self.version {
			log::trace!(
				"discarded stale filter result for version {version} (latest {})",
				self.version
			);
			return false;
		}
		let view = task.into_view(Arc::clone(&self.index));
		self.commit(version, view)
	}

	fn commit(&mut self, version: u64, view: FilteredView) -> bool {
		log::debug!(
			"committed {} of {} icons for version {version}",
			view.len(),
			self.index.len()
		);
		self.committed = Committed { version, view };
		true
	}
}
