use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;

/// Terminal rows moved per wheel notch.
const WHEEL_STEP: isize = 1;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			match key.code {
				KeyCode::Char('l') => {
					self.show_logs = !self.show_logs;
					return;
				}
				KeyCode::Char('c') => {
					self.cancel();
					return;
				}
				_ => {}
			}
		}

		let columns = self.geometry().column_count as isize;
		let page = (self.geometry().rows_per_page() as isize) * columns;
		match key.code {
			KeyCode::Esc => self.cancel(),
			KeyCode::Enter => self.select_focused(),
			KeyCode::Left => self.move_focus(-1),
			KeyCode::Right => self.move_focus(1),
			KeyCode::Up => self.move_focus(-columns),
			KeyCode::Down => self.move_focus(columns),
			KeyCode::PageUp => self.move_focus(-page),
			KeyCode::PageDown => self.move_focus(page),
			_ => {
				if self.search_input.input(key) {
					self.sync_query();
				}
			}
		}
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
			MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
			MouseEventKind::Down(MouseButton::Left) => {
				let point = Position::new(mouse.column, mouse.row);
				if !self.grid_area.contains(point) {
					return;
				}
				let x = mouse.column - self.grid_area.x;
				let y = mouse.row - self.grid_area.y;
				let hit = self
					.geometry()
					.cell_at(self.visible_len(), self.scroll_offset, x, y);
				if let Some(position) = hit {
					self.select(position);
				}
			}
			_ => {}
		}
	}
}
