use std::sync::Arc;

use super::view::FilteredView;
use crate::catalog::{AssetIndex, Icon};

/// Case-insensitive substring test against an already lowercased needle.
pub(crate) fn matches_needle(icon: &Icon, needle: &str) -> bool {
	icon.search_key().contains(needle)
}

/// Incremental filter over the index for one query version.
///
/// The task only ever appends to its private match list; nothing becomes
/// visible until the engine commits the finished task.
#[derive(Debug)]
pub(crate) struct FilterTask {
	version: u64,
	needle: String,
	cursor: usize,
	matches: Vec<usize>,
}

impl FilterTask {
	pub(crate) fn new(version: u64, query: &str) -> Self {
		Self {
			version,
			needle: query.to_lowercase(),
			cursor: 0,
			matches: Vec::new(),
		}
	}

	pub(crate) fn version(&self) -> u64 {
		self.version
	}

	/// Visit at most `budget` entries. Returns `true` once the whole index has
	/// been scanned.
	pub(crate) fn step(&mut self, index: &AssetIndex, budget: usize) -> bool {
		let total = index.len();
		let end = self.cursor.saturating_add(budget.max(1)).min(total);
		for (offset, icon) in index.as_slice()[self.cursor..end].iter().enumerate() {
			if matches_needle(icon, &self.needle) {
				self.matches.push(self.cursor + offset);
			}
		}
		self.cursor = end;
		self.is_complete(total)
	}

	pub(crate) fn is_complete(&self, total: usize) -> bool {
		self.cursor >= total
	}

	pub(crate) fn into_view(self, index: Arc<AssetIndex>) -> FilteredView {
		FilteredView::from_matches(index, self.matches)
	}
}
