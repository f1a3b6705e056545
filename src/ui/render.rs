use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use throbber_widgets_tui::Throbber;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::App;
use super::theme::Theme;
use crate::grid::compute_cells;
use crate::labels::{Translate, keys};
use crate::search::FilterOutcome;

const PROMPT: &str = "> ";
const ELLIPSIS: char = '…';

impl<'a> App<'a> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let mut area = frame.area();
		if self.show_logs {
			let [picker_area, logs_area] =
				Layout::vertical([Constraint::Min(8), Constraint::Percentage(35)]).areas(area);
			self.render_logs(frame, logs_area);
			area = picker_area;
		}

		let labels = &self.options.labels;
		let title = self
			.options
			.title
			.clone()
			.unwrap_or_else(|| labels.translate(keys::TITLE));
		let block = Block::bordered()
			.border_style(self.theme.border_style())
			.title(Line::from(format!(" {title} ")).style(self.theme.header_style()))
			.title_bottom(
				Line::from(format!(" {} ", labels.translate(keys::HINT)))
					.style(self.theme.empty_style())
					.right_aligned(),
			);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [input_area, grid_area, status_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(inner);

		self.render_input(frame, input_area);
		self.grid_area = grid_area;
		self.render_grid(frame, grid_area);
		self.render_status(frame, status_area);
	}

	fn render_input(&self, frame: &mut Frame, area: Rect) {
		let prompt_width = PROMPT.len() as u16;
		let [prompt_area, text_area] =
			Layout::horizontal([Constraint::Length(prompt_width), Constraint::Min(1)]).areas(area);
		frame.render_widget(
			Paragraph::new(PROMPT).style(self.theme.prompt_style()),
			prompt_area,
		);
		self.search_input.render_textarea(frame, text_area);
	}

	fn render_grid(&self, frame: &mut Frame, area: Rect) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		if let FilterOutcome::NoResults = self.picker.outcome() {
			let message = Paragraph::new(self.options.labels.translate(keys::NO_RESULTS))
				.alignment(Alignment::Center)
				.style(self.theme.empty_style());
			let middle = Rect {
				y: area.y + area.height / 2,
				height: 1,
				..area
			};
			frame.render_widget(message, middle);
			return;
		}

		let view = self.picker.view();
		let geometry = self.geometry();
		let window = geometry.window(view.len(), self.scroll_offset);
		let top_edge = i32::from(area.y);
		let bottom_edge = i32::from(area.bottom());

		for cell in compute_cells(view, &geometry, &window) {
			let top = top_edge + cell.y;
			let bottom = top + i32::from(cell.height);
			let clip_top = top.max(top_edge);
			let clip_bottom = bottom.min(bottom_edge);
			if clip_bottom <= clip_top {
				continue;
			}
			let rect = Rect::new(
				area.x + cell.x,
				clip_top as u16,
				cell.width,
				(clip_bottom - clip_top) as u16,
			);
			let fully_visible = clip_top == top && clip_bottom == bottom;
			render_cell(
				frame,
				rect,
				cell.icon.name(),
				cell.index == self.focus,
				fully_visible,
				&self.theme,
			);
		}
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		let labels = &self.options.labels;

		let left = match &self.picker.host().notice {
			Some(notice) => Span::styled(notice.clone(), self.theme.error_style()),
			None => Span::styled(labels.count(self.visible_len()), self.theme.empty_style()),
		};
		frame.render_widget(Paragraph::new(Line::from(left)), area);

		let activity = if let Some(name) = self.picker.pending_selection() {
			Some(format!("{} {name}", labels.translate(keys::ENCODING)))
		} else if self.picker.search().is_pending() {
			Some(labels.translate(keys::FILTERING))
		} else {
			None
		};
		if let Some(activity) = activity {
			let muted = self.theme.empty_style();
			let spinner = Throbber::default().style(muted).throbber_style(muted);
			let line = Line::from(vec![
				spinner.to_symbol_span(&self.throbber_state),
				Span::styled(activity, muted),
			])
			.right_aligned();
			frame.render_widget(Paragraph::new(line), area);
		}
	}

	fn render_logs(&self, frame: &mut Frame, area: Rect) {
		let widget = TuiLoggerWidget::default()
			.block(
				Block::bordered()
					.title(" Logs ")
					.border_style(self.theme.border_style()),
			)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_timestamp(Some("%H:%M:%S".to_string()))
			.state(&self.log_state);
		frame.render_widget(widget, area);
	}
}

fn render_cell(
	frame: &mut Frame,
	rect: Rect,
	name: &str,
	focused: bool,
	bordered: bool,
	theme: &Theme,
) {
	let text_style = if focused {
		theme.focus_style()
	} else {
		Style::default()
	};

	let inner = if bordered && rect.height >= 3 && rect.width >= 3 {
		let border_style = if focused {
			theme.focus_style()
		} else {
			theme.border_style()
		};
		let block = Block::bordered().border_style(border_style);
		let inner = block.inner(rect);
		frame.render_widget(block, rect);
		inner
	} else {
		rect
	};
	if inner.width == 0 || inner.height == 0 {
		return;
	}

	let label = truncate_to_width(name, usize::from(inner.width));
	let line_area = Rect {
		y: inner.y + inner.height / 2,
		height: 1,
		..inner
	};
	frame.render_widget(
		Paragraph::new(label)
			.style(text_style)
			.alignment(Alignment::Center),
		line_area,
	);
}

/// Cut `text` to at most `max_width` columns, ending in an ellipsis when
/// shortened.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
	if text.width() <= max_width {
		return text.to_string();
	}
	if max_width == 0 {
		return String::new();
	}

	let budget = max_width - 1;
	let mut width = 0;
	let mut out = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if width + ch_width > budget {
			break;
		}
		width += ch_width;
		out.push(ch);
	}
	out.push(ELLIPSIS);
	out
}

#[cfg(test)]
mod tests {
	use super::truncate_to_width;

	#[test]
	fn short_names_are_untouched() {
		assert_eq!(truncate_to_width("Key", 9), "Key");
	}

	#[test]
	fn long_names_end_in_an_ellipsis() {
		assert_eq!(truncate_to_width("Password Manager", 9), "Password…");
		assert_eq!(truncate_to_width("Shopping Cart", 1), "…");
		assert_eq!(truncate_to_width("Wallet", 0), "");
	}

	#[test]
	fn wide_characters_count_double() {
		assert_eq!(truncate_to_width("鍵鍵鍵", 4), "鍵…");
	}
}
