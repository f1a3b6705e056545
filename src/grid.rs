//! Windowed layout of a filtered view as a fixed-column grid.
//!
//! Everything here is a pure function of the view length, the container
//! geometry and the scroll offset. Only cells intersecting the viewport are
//! ever produced, so render cost tracks the viewport rather than the catalog.

use std::ops::Range;

use crate::catalog::Icon;
use crate::search::FilteredView;

/// Column count used when none is configured.
pub const DEFAULT_COLUMN_COUNT: usize = 5;

/// Fixed container dimensions for the grid. All lengths share one unit
/// (terminal cells for the bundled host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
	pub column_count: usize,
	pub width: u16,
	pub height: u16,
	pub row_height: u16,
}

/// The rows and columns of the grid intersecting the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportWindow {
	pub rows: Range<usize>,
	pub columns: Range<usize>,
	pub column_count: usize,
	pub row_height: u16,
	pub column_width: u16,
	/// Scroll offset the window was computed for.
	pub scroll_offset: usize,
}

impl ViewportWindow {
	pub fn first_visible_row(&self) -> Option<usize> {
		(!self.rows.is_empty()).then_some(self.rows.start)
	}

	pub fn last_visible_row(&self) -> Option<usize> {
		(!self.rows.is_empty()).then(|| self.rows.end - 1)
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty() || self.columns.is_empty()
	}
}

/// A grid cell that has to be rendered, borrowing its icon from the view.
#[derive(Debug, Clone, Copy)]
pub struct CellDescriptor<'v> {
	/// Linear position within the view: `row * column_count + column`.
	pub index: usize,
	pub row: usize,
	pub column: usize,
	/// Left edge relative to the container.
	pub x: u16,
	/// Top edge relative to the container; negative for a row scrolled
	/// partially out of view.
	pub y: i32,
	pub width: u16,
	pub height: u16,
	pub icon: &'v Icon,
}

impl GridGeometry {
	pub fn new(column_count: usize, width: u16, height: u16, row_height: u16) -> Self {
		Self {
			column_count: column_count.max(1),
			width,
			height,
			row_height: row_height.max(1),
		}
	}

	/// Uniform width of every column.
	pub fn column_width(&self) -> u16 {
		let width = usize::from(self.width) / self.column_count.max(1);
		u16::try_from(width).unwrap_or(u16::MAX)
	}

	/// `ceil(len / column_count)`.
	pub fn row_count(&self, len: usize) -> usize {
		len.div_ceil(self.column_count.max(1))
	}

	/// Total height of the grid content.
	pub fn content_height(&self, len: usize) -> usize {
		self.row_count(len) * usize::from(self.row_height)
	}

	/// Largest scroll offset that still fills the viewport.
	pub fn max_scroll_offset(&self, len: usize) -> usize {
		self.content_height(len)
			.saturating_sub(usize::from(self.height))
	}

	/// Number of rows fully visible at once.
	pub fn rows_per_page(&self) -> usize {
		(usize::from(self.height) / usize::from(self.row_height)).max(1)
	}

	/// Rows and columns intersecting the viewport at `scroll_offset`.
	pub fn window(&self, len: usize, scroll_offset: usize) -> ViewportWindow {
		let scroll_offset = scroll_offset.min(self.max_scroll_offset(len));
		let row_height = usize::from(self.row_height);
		let row_count = self.row_count(len);
		let rows = if row_count == 0 || self.height == 0 {
			0..0
		} else {
			let first = scroll_offset / row_height;
			let end = (scroll_offset + usize::from(self.height))
				.div_ceil(row_height)
				.min(row_count);
			first..end
		};
		self.window_for(rows, 0..self.column_count, scroll_offset)
	}

	/// A window over an explicit row/column range.
	pub fn window_for(
		&self,
		rows: Range<usize>,
		columns: Range<usize>,
		scroll_offset: usize,
	) -> ViewportWindow {
		ViewportWindow {
			rows,
			columns: columns.start.min(self.column_count)..columns.end.min(self.column_count),
			column_count: self.column_count,
			row_height: self.row_height,
			column_width: self.column_width(),
			scroll_offset,
		}
	}

	/// Scroll offset that keeps the cell at `index` fully in view, moving as
	/// little as possible from `scroll_offset`.
	pub fn scroll_to_reveal(&self, len: usize, scroll_offset: usize, index: usize) -> usize {
		if len == 0 {
			return 0;
		}
		let row = index.min(len - 1) / self.column_count;
		let row_height = usize::from(self.row_height);
		let top = row * row_height;
		let bottom = top + row_height;
		let height = usize::from(self.height);

		let offset = if top < scroll_offset {
			top
		} else if bottom > scroll_offset + height {
			bottom.saturating_sub(height)
		} else {
			scroll_offset
		};
		offset.min(self.max_scroll_offset(len))
	}

	/// Linear index of the cell under the container-relative point `(x, y)`.
	pub fn cell_at(&self, len: usize, scroll_offset: usize, x: u16, y: u16) -> Option<usize> {
		let column_width = self.column_width();
		if column_width == 0 || x >= self.width || y >= self.height {
			return None;
		}
		let column = usize::from(x / column_width);
		if column >= self.column_count {
			return None;
		}
		let scroll_offset = scroll_offset.min(self.max_scroll_offset(len));
		let row = (scroll_offset + usize::from(y)) / usize::from(self.row_height);
		let index = row * self.column_count + column;
		(index < len).then_some(index)
	}
}

/// Produce the cells of `window` that map onto an entry of `view`.
///
/// Slots past the end of the view produce nothing. Rows beyond
/// [`GridGeometry::row_count`] are ignored.
pub fn compute_cells<'v>(
	view: &'v FilteredView,
	geometry: &GridGeometry,
	window: &ViewportWindow,
) -> Vec<CellDescriptor<'v>> {
	let len = view.len();
	let row_count = geometry.row_count(len);
	let rows = window.rows.start.min(row_count)..window.rows.end.min(row_count);
	let columns =
		window.columns.start.min(geometry.column_count)..window.columns.end.min(geometry.column_count);
	let column_width = geometry.column_width();
	let row_height = geometry.row_height;

	let mut cells = Vec::with_capacity(rows.len() * columns.len());
	for row in rows {
		let top = (row * usize::from(row_height)) as i64 - window.scroll_offset as i64;
		for column in columns.clone() {
			let index = row * geometry.column_count + column;
			let Some(icon) = view.get(index) else {
				break;
			};
			cells.push(CellDescriptor {
				index,
				row,
				column,
				x: u16::try_from(column * usize::from(column_width)).unwrap_or(u16::MAX),
				y: i32::try_from(top).unwrap_or(i32::MAX),
				width: column_width,
				height: row_height,
				icon,
			});
		}
	}
	cells
}
