//! Query filtering over the icon catalog.

mod engine;
mod task;
mod view;

use std::sync::Arc;

pub use engine::{FilterOutcome, SearchFilterEngine};
pub use view::FilteredView;

use crate::catalog::AssetIndex;

/// Number of index entries visited per cooperative filter step.
pub const DEFAULT_CHUNK_SIZE: usize = 512;

/// Filter `index` by `query` in one go.
///
/// This is the reference behaviour of the deferred engine: an empty query
/// yields the full index, anything else keeps the entries whose name
/// contains the query case-insensitively, in index order.
pub fn filter_index(index: &Arc<AssetIndex>, query: &str) -> FilteredView {
	if query.is_empty() {
		return FilteredView::full(Arc::clone(index));
	}
	let needle = query.to_lowercase();
	let matches = index
		.iter()
		.enumerate()
		.filter(|(_, icon)| task::matches_needle(icon, &needle))
		.map(|(offset, _)| offset)
		.collect();
	FilteredView::from_matches(Arc::clone(index), matches)
}
