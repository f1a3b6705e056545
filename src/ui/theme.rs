use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub header: Style,
	pub prompt: Style,
	pub empty: Style,
	pub border: Style,
	pub focus: Style,
	pub error: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
			prompt: Style::new().fg(Color::Green),
			empty: Style::new().fg(Color::DarkGray),
			border: Style::new().fg(Color::Gray),
			focus: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
			error: Style::new().fg(Color::Red),
		}
	}
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	#[must_use]
	pub fn focus_style(&self) -> Style {
		self.focus
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}
}
