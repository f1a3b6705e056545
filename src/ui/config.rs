use crate::grid::DEFAULT_COLUMN_COUNT;
use crate::labels::Labels;
use crate::search::DEFAULT_CHUNK_SIZE;

/// Terminal cells per grid row: a bordered box around the icon name.
pub const DEFAULT_ROW_HEIGHT: u16 = 3;

/// Presentation settings for the terminal picker.
#[derive(Debug, Clone)]
pub struct UiOptions {
	pub columns: usize,
	pub row_height: u16,
	/// Index entries filtered between two input polls.
	pub chunk_size: usize,
	pub initial_query: String,
	pub labels: Labels,
	/// Overrides the `picker.title` label.
	pub title: Option<String>,
}

impl Default for UiOptions {
	fn default() -> Self {
		Self {
			columns: DEFAULT_COLUMN_COUNT,
			row_height: DEFAULT_ROW_HEIGHT,
			chunk_size: DEFAULT_CHUNK_SIZE,
			initial_query: String::new(),
			labels: Labels::default(),
			title: None,
		}
	}
}
