use std::fmt;
use std::sync::Arc;

use crate::catalog::{AssetIndex, Icon};

#[derive(Clone)]
enum Selection {
	All,
	Subset(Arc<[usize]>),
}

/// An order-preserving subsequence of the [`AssetIndex`].
///
/// Views are cheap to clone and never copy icons; they hold the shared index
/// and, for anything narrower than the full catalog, the matching offsets.
#[derive(Clone)]
pub struct FilteredView {
	index: Arc<AssetIndex>,
	selection: Selection,
}

impl FilteredView {
	/// The whole catalog.
	pub fn full(index: Arc<AssetIndex>) -> Self {
		Self {
			index,
			selection: Selection::All,
		}
	}

	/// A view over ascending offsets into `index`.
	pub(crate) fn from_matches(index: Arc<AssetIndex>, matches: Vec<usize>) -> Self {
		debug_assert!(matches.windows(2).all(|pair| pair[0] < pair[1]));
		debug_assert!(matches.last().is_none_or(|last| *last < index.len()));
		Self {
			index,
			selection: Selection::Subset(matches.into()),
		}
	}

	pub fn len(&self) -> usize {
		match &self.selection {
			Selection::All => self.index.len(),
			Selection::Subset(offsets) => offsets.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Whether the view covers the whole catalog without filtering.
	pub fn is_full(&self) -> bool {
		matches!(self.selection, Selection::All)
	}

	/// Icon at `position` within the view.
	pub fn get(&self, position: usize) -> Option<&Icon> {
		let offset = match &self.selection {
			Selection::All => position,
			Selection::Subset(offsets) => *offsets.get(position)?,
		};
		self.index.get(offset)
	}

	/// Offsets into the underlying index, in view order.
	pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
		let (all, subset) = match &self.selection {
			Selection::All => (Some(0..self.index.len()), None),
			Selection::Subset(offsets) => (None, Some(offsets.iter().copied())),
		};
		all.into_iter().flatten().chain(subset.into_iter().flatten())
	}

	pub fn iter(&self) -> impl Iterator<Item = &Icon> + '_ {
		self.offsets().filter_map(|offset| self.index.get(offset))
	}

	pub fn names(&self) -> Vec<&str> {
		self.iter().map(Icon::name).collect()
	}

	pub fn index(&self) -> &Arc<AssetIndex> {
		&self.index
	}
}

impl PartialEq for FilteredView {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.index, &other.index)
			&& self.len() == other.len()
			&& self.offsets().eq(other.offsets())
	}
}

impl Eq for FilteredView {}

impl fmt::Debug for FilteredView {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FilteredView")
			.field("len", &self.len())
			.field("names", &self.names())
			.finish()
	}
}
