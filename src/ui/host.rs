use crate::encode::{EncodeError, SelectionResult};
use crate::picker::PickerHost;

/// Result of one terminal picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOutcome {
	/// `true` when an icon was chosen, `false` on cancel.
	pub accepted: bool,
	/// Query on screen when the session ended.
	pub query: String,
	pub selection: Option<SelectionResult>,
}

/// The terminal's side of [`PickerHost`]: remembers what the picker reported
/// so the event loop can finish the session.
#[derive(Debug, Default)]
pub struct TerminalHost {
	pub(crate) selection: Option<SelectionResult>,
	pub(crate) closed: bool,
	/// Last encode failure, shown in the status line.
	pub(crate) notice: Option<String>,
}

impl PickerHost for TerminalHost {
	fn on_icon_click(&mut self, selection: SelectionResult) {
		self.notice = None;
		self.selection = Some(selection);
	}

	fn on_close(&mut self) {
		self.closed = true;
	}

	fn on_error(&mut self, error: &EncodeError) {
		self.notice = Some(error.to_string());
	}
}
