use std::sync::Arc;
use std::time::Duration;

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
	MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};

use crate::catalog::{AssetIndex, IconResource, MemoryAssets};
use crate::labels::{Labels, keys};
use crate::ui::{App, UiOptions};

const TIMEOUT: Duration = Duration::from_secs(5);

fn index() -> Arc<AssetIndex> {
	let assets = MemoryAssets::new()
		.with("icons/Cherry.svg", b"<svg>cherry</svg>".to_vec())
		.with("icons/banana.svg", b"<svg>banana</svg>".to_vec())
		.with("icons/Apple.svg", b"<svg>apple</svg>".to_vec())
		.with("icons/Password%20Manager.svg", b"<svg>pm</svg>".to_vec());
	Arc::new(AssetIndex::build(&assets).expect("index"))
}

fn app() -> App<'static> {
	App::new(index(), UiOptions::default()).expect("app")
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent {
		code,
		modifiers: KeyModifiers::NONE,
		kind: KeyEventKind::Press,
		state: KeyEventState::NONE,
	}
}

fn ctrl(c: char) -> KeyEvent {
	KeyEvent {
		modifiers: KeyModifiers::CONTROL,
		..key(KeyCode::Char(c))
	}
}

fn type_text(app: &mut App<'_>, text: &str) {
	for c in text.chars() {
		app.handle_key(key(KeyCode::Char(c)));
	}
}

fn settle(app: &mut App<'_>) {
	while app.picker().search().is_pending() {
		app.pump_filter();
	}
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(60, 14)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal.backend().to_string()
}

#[test]
fn first_frame_shows_every_icon() {
	let mut app = app();
	let screen = render(&mut app);

	assert!(screen.contains("Choose an icon"));
	for name in ["Apple", "banana", "Cherry", "Password…"] {
		assert!(screen.contains(name), "missing {name} in\n{screen}");
	}
	assert!(screen.contains("4 icons"));
}

#[test]
fn typing_narrows_the_grid_after_filtering() {
	let mut app = app();
	render(&mut app);
	type_text(&mut app, "an");
	assert_eq!(app.picker().query(), "an");

	let pending = render(&mut app);
	assert!(pending.contains("Filtering"));
	assert!(pending.contains("Cherry"), "old view stays until commit");

	settle(&mut app);
	let screen = render(&mut app);
	assert!(screen.contains("banana"));
	assert!(screen.contains("Password…"));
	assert!(!screen.contains("Cherry"));
	assert!(screen.contains("2 icons"));
}

#[test]
fn unmatched_query_shows_the_no_results_label() {
	let labels = Labels::default().with_overrides([(keys::NO_RESULTS, "Nothing here")]);
	let options = UiOptions {
		labels,
		..UiOptions::default()
	};
	let mut app = App::new(index(), options).expect("app");
	type_text(&mut app, "zzz");
	settle(&mut app);

	let screen = render(&mut app);
	assert!(screen.contains("Nothing here"));
	assert!(screen.contains("0 icons"));
}

#[test]
fn initial_query_is_prefilled() {
	let options = UiOptions {
		initial_query: "cher".into(),
		..UiOptions::default()
	};
	let mut app = App::new(index(), options).expect("app");
	assert_eq!(app.search_input.text(), "cher");
	settle(&mut app);
	assert_eq!(app.picker().view().names(), vec!["Cherry"]);
}

#[test]
fn arrows_move_focus_within_the_view() {
	let mut app = app();
	render(&mut app);

	app.handle_key(key(KeyCode::Right));
	app.handle_key(key(KeyCode::Right));
	assert_eq!(app.focus(), 2);
	app.handle_key(key(KeyCode::Left));
	assert_eq!(app.focus(), 1);
	app.handle_key(key(KeyCode::Down));
	assert_eq!(app.focus(), 3, "clamped to the last icon");
	app.handle_key(key(KeyCode::Up));
	assert_eq!(app.focus(), 0);
}

#[test]
fn enter_selects_the_focused_icon() {
	let mut app = app();
	render(&mut app);
	type_text(&mut app, "ban");
	settle(&mut app);

	app.handle_key(key(KeyCode::Enter));
	assert!(app.picker.wait_for_encode(TIMEOUT));

	let outcome = app.take_outcome().expect("session finished");
	assert!(outcome.accepted);
	assert_eq!(outcome.query, "ban");
	let selection = outcome.selection.expect("selection");
	assert_eq!(selection.name, "banana");
	assert_eq!(
		selection.data_uri,
		"data:image/svg+xml;base64,PHN2Zz5iYW5hbmE8L3N2Zz4="
	);
}

#[test]
fn enter_without_results_does_nothing() {
	let mut app = app();
	type_text(&mut app, "zzz");
	settle(&mut app);

	app.handle_key(key(KeyCode::Enter));
	assert!(app.picker().pending_selection().is_none());
	assert!(app.take_outcome().is_none());
}

#[test]
fn escape_cancels_with_the_current_query() {
	let mut app = app();
	type_text(&mut app, "app");
	app.handle_key(key(KeyCode::Esc));

	let outcome = app.take_outcome().expect("session finished");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "app");
	assert!(outcome.selection.is_none());
}

#[test]
fn clicking_a_cell_selects_it() {
	let mut app = app();
	render(&mut app);

	// Border at column 0, five 11-wide columns from column 1; grid starts on row 2.
	let click = MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: 1 + 11 + 3,
		row: 3,
		modifiers: KeyModifiers::NONE,
	};
	app.handle_mouse(click);
	assert_eq!(app.picker().pending_selection(), Some("banana"));
	assert!(app.picker.wait_for_encode(TIMEOUT));

	let outcome = app.take_outcome().expect("session finished");
	assert_eq!(outcome.selection.map(|s| s.name).as_deref(), Some("banana"));
}

#[test]
fn clicks_outside_the_grid_are_ignored() {
	let mut app = app();
	render(&mut app);
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: 5,
		row: 0,
		modifiers: KeyModifiers::NONE,
	});
	assert!(app.picker().pending_selection().is_none());
}

#[test]
fn ctrl_l_toggles_the_log_drawer() {
	let mut app = app();
	app.handle_key(ctrl('l'));
	let screen = render(&mut app);
	assert!(screen.contains("Logs"));
	assert_eq!(app.search_input.text(), "");

	app.handle_key(ctrl('l'));
	let screen = render(&mut app);
	assert!(!screen.contains("Logs"));
}

#[test]
fn encode_errors_clear_once_the_query_changes() {
	let temp = tempfile::tempdir().expect("tempdir");
	let assets = MemoryAssets::new()
		.with("icons/Apple.svg", b"<svg>apple</svg>".to_vec())
		.with_resource(
			"icons/Broken.svg",
			IconResource::File(temp.path().join("Broken.svg")),
		);
	let index = Arc::new(AssetIndex::build(&assets).expect("index"));
	let mut app = App::new(index, UiOptions::default()).expect("app");
	render(&mut app);

	type_text(&mut app, "bro");
	settle(&mut app);
	app.handle_key(key(KeyCode::Enter));
	assert!(app.picker.wait_for_encode(TIMEOUT));
	assert!(app.picker().is_open());
	let screen = render(&mut app);
	assert!(screen.contains("failed to read"), "no error in\n{screen}");

	for _ in 0..3 {
		app.handle_key(key(KeyCode::Backspace));
	}
	settle(&mut app);
	let screen = render(&mut app);
	assert!(!screen.contains("failed to read"), "stale error in\n{screen}");
	assert!(screen.contains("2 icons"));
}
