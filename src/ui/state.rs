//! State container for the terminal picker.

use std::io;
use std::sync::Arc;

use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;
use tui_logger::TuiWidgetState;

use super::config::UiOptions;
use super::host::{PickerOutcome, TerminalHost};
use super::input::SearchInput;
use super::theme::Theme;
use crate::catalog::AssetIndex;
use crate::grid::GridGeometry;
use crate::labels::{Translate, keys};
use crate::picker::PickerController;

/// The picker as seen by the terminal: controller plus focus, scroll and
/// drawing caches.
pub struct App<'a> {
	pub(crate) picker: PickerController<TerminalHost>,
	pub search_input: SearchInput<'a>,
	/// Position of the keyboard-focused cell within the visible view.
	pub(crate) focus: usize,
	/// Vertical scroll of the grid, in terminal rows.
	pub(crate) scroll_offset: usize,
	/// Grid region from the last draw, used for mouse hit testing.
	pub(crate) grid_area: Rect,
	pub(crate) options: UiOptions,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) log_state: TuiWidgetState,
	pub(crate) show_logs: bool,
	/// Query captured when the user selected or cancelled; the controller
	/// clears its own on close.
	submitted_query: String,
}

impl<'a> App<'a> {
	/// Open a picker over `index`.
	pub fn new(index: Arc<AssetIndex>, options: UiOptions) -> io::Result<Self> {
		let mut picker = PickerController::new(index, TerminalHost::default())?
			.with_chunk_size(options.chunk_size);
		picker.open();
		if !options.initial_query.is_empty() {
			picker.on_query_change(options.initial_query.as_str());
		}

		let search_input = SearchInput::new(options.initial_query.clone())
			.with_placeholder(options.labels.translate(keys::SEARCH));

		Ok(Self {
			picker,
			search_input,
			focus: 0,
			scroll_offset: 0,
			grid_area: Rect::default(),
			options,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			log_state: TuiWidgetState::new(),
			show_logs: false,
			submitted_query: String::new(),
		})
	}

	pub fn picker(&self) -> &PickerController<TerminalHost> {
		&self.picker
	}

	pub fn focus(&self) -> usize {
		self.focus
	}

	/// Grid geometry for the area drawn last.
	pub(crate) fn geometry(&self) -> GridGeometry {
		GridGeometry::new(
			self.options.columns,
			self.grid_area.width,
			self.grid_area.height,
			self.options.row_height,
		)
	}

	pub(crate) fn visible_len(&self) -> usize {
		self.picker.view().len()
	}

	/// Push the input text to the filter and restart focus at the top.
	pub(crate) fn sync_query(&mut self) {
		self.picker.host_mut().notice = None;
		self.picker.on_query_change(self.search_input.text());
		self.focus = 0;
		self.scroll_offset = 0;
	}

	/// Advance deferred filtering by one chunk.
	pub fn pump_filter(&mut self) -> bool {
		let changed = self.picker.pump_filter();
		if changed {
			self.clamp_focus();
		}
		changed
	}

	pub fn pump_encode(&mut self) {
		self.picker.pump_encode();
	}

	/// Whether any work is waiting to be pumped.
	pub(crate) fn is_busy(&self) -> bool {
		self.picker.search().is_pending() || self.picker.pending_selection().is_some()
	}

	pub(crate) fn set_focus(&mut self, focus: usize) {
		let len = self.visible_len();
		if len == 0 {
			self.focus = 0;
			return;
		}
		self.focus = focus.min(len - 1);
		self.scroll_offset = self
			.geometry()
			.scroll_to_reveal(len, self.scroll_offset, self.focus);
	}

	pub(crate) fn move_focus(&mut self, delta: isize) {
		let target = self.focus.saturating_add_signed(delta);
		self.set_focus(target);
	}

	pub(crate) fn scroll_by(&mut self, delta: isize) {
		let max = self.geometry().max_scroll_offset(self.visible_len());
		self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(max);
	}

	/// Select the focused cell.
	pub(crate) fn select_focused(&mut self) {
		self.select(self.focus);
	}

	pub(crate) fn select(&mut self, position: usize) {
		self.submitted_query = self.picker.query().to_string();
		self.picker.host_mut().notice = None;
		if self.picker.select(position) {
			self.focus = position;
		}
	}

	pub(crate) fn cancel(&mut self) {
		self.submitted_query = self.picker.query().to_string();
		self.picker.close();
	}

	/// The finished session, once the picker has closed itself.
	pub fn take_outcome(&mut self) -> Option<PickerOutcome> {
		if self.picker.is_open() || !self.picker.host().closed {
			return None;
		}
		let selection = self.picker.host_mut().selection.take();
		Some(PickerOutcome {
			accepted: selection.is_some(),
			query: std::mem::take(&mut self.submitted_query),
			selection,
		})
	}

	fn clamp_focus(&mut self) {
		let len = self.visible_len();
		self.focus = self.focus.min(len.saturating_sub(1));
		self.scroll_offset = self
			.scroll_offset
			.min(self.geometry().max_scroll_offset(len));
	}
}
