use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::catalog::{AssetIndex, IconResource, MemoryAssets};

const TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct RecordingHost {
	selections: Vec<SelectionResult>,
	closes: usize,
	errors: Vec<String>,
}

impl PickerHost for RecordingHost {
	fn on_icon_click(&mut self, selection: SelectionResult) {
		self.selections.push(selection);
	}

	fn on_close(&mut self) {
		self.closes += 1;
	}

	fn on_error(&mut self, error: &EncodeError) {
		self.errors.push(error.to_string());
	}
}

fn index() -> Arc<AssetIndex> {
	let assets = MemoryAssets::new()
		.with("assets/Cherry.svg", b"<svg>cherry</svg>".to_vec())
		.with("assets/banana.svg", b"<svg>banana</svg>".to_vec())
		.with("assets/Apple.svg", b"<svg>apple</svg>".to_vec())
		.with_resource(
			"assets/Broken.svg",
			IconResource::File(PathBuf::from("/missing/assets/Broken.svg")),
		);
	Arc::new(AssetIndex::build(&assets).expect("index"))
}

fn open_picker() -> PickerController<RecordingHost> {
	let mut picker = PickerController::new(index(), RecordingHost::default()).expect("picker");
	picker.open();
	picker
}

fn position_of(picker: &PickerController<RecordingHost>, name: &str) -> usize {
	picker
		.view()
		.iter()
		.position(|icon| icon.name() == name)
		.expect("icon in view")
}

#[test]
fn starts_closed_and_opens_with_the_full_catalog() {
	let mut picker = PickerController::new(index(), RecordingHost::default()).expect("picker");
	assert_eq!(picker.state(), PickerState::Closed);

	picker.open();
	assert_eq!(picker.state(), PickerState::Open);
	assert_eq!(picker.query(), "");
	assert_eq!(
		picker.view().names(),
		vec!["Apple", "banana", "Broken", "Cherry"]
	);
}

#[test]
fn typing_filters_through_the_deferred_engine() {
	let mut picker = open_picker();
	picker.on_query_change("an");
	assert_eq!(picker.query(), "an");
	assert_eq!(picker.outcome(), FilterOutcome::Pending);

	assert!(picker.flush_filter());
	assert_eq!(picker.view().names(), vec!["banana"]);
}

#[test]
fn successful_selection_notifies_then_closes() {
	let mut picker = open_picker();
	picker.on_query_change("ban");
	picker.flush_filter();

	assert!(picker.select(0));
	assert_eq!(picker.state(), PickerState::Selecting);
	assert_eq!(picker.pending_selection(), Some("banana"));
	assert!(picker.wait_for_encode(TIMEOUT));

	assert_eq!(picker.state(), PickerState::Closed);
	assert_eq!(picker.query(), "");
	assert!(picker.view().is_full());

	let host = picker.into_host();
	assert_eq!(host.closes, 1);
	assert!(host.errors.is_empty());
	assert_eq!(host.selections.len(), 1);
	assert_eq!(host.selections[0].name, "banana");
	assert_eq!(
		host.selections[0].data_uri,
		"data:image/svg+xml;base64,PHN2Zz5iYW5hbmE8L3N2Zz4="
	);
}

#[test]
fn failed_encode_keeps_the_picker_usable() {
	let mut picker = open_picker();
	let broken = position_of(&picker, "Broken");

	assert!(picker.select(broken));
	assert!(picker.wait_for_encode(TIMEOUT));

	assert_eq!(picker.state(), PickerState::Open);
	assert_eq!(picker.host().errors.len(), 1);
	assert!(picker.host().errors[0].contains("Broken"));
	assert_eq!(picker.host().closes, 0);

	let apple = position_of(&picker, "Apple");
	assert!(picker.select(apple));
	assert!(picker.wait_for_encode(TIMEOUT));
	assert_eq!(picker.state(), PickerState::Closed);
	assert_eq!(picker.host().selections[0].name, "Apple");
}

#[test]
fn cancel_resets_and_notifies() {
	let mut picker = open_picker();
	picker.on_query_change("zzz");
	picker.flush_filter();
	assert_eq!(picker.outcome(), FilterOutcome::NoResults);

	picker.close();
	assert_eq!(picker.state(), PickerState::Closed);
	assert_eq!(picker.host().closes, 1);

	picker.open();
	assert_eq!(picker.query(), "");
	assert!(matches!(picker.outcome(), FilterOutcome::Matches(view) if view.len() == 4));
}

#[test]
fn closing_mid_filter_discards_the_pending_view() {
	let mut picker = open_picker();
	picker.on_query_change("cher");
	picker.close();
	assert!(!picker.flush_filter());

	picker.open();
	assert!(picker.view().is_full());
}

#[test]
fn closing_during_encode_drops_the_late_result() {
	let mut picker = open_picker();
	assert!(picker.select(0));
	picker.close();
	assert_eq!(picker.pending_selection(), None);

	let late = picker.encoder.recv_timeout(TIMEOUT).expect("worker still answers");
	picker.handle_encode_result(late);

	assert_eq!(picker.state(), PickerState::Closed);
	assert!(picker.host().selections.is_empty());
	assert_eq!(picker.host().closes, 1);
}

#[test]
fn newer_selection_supersedes_older_one() {
	let mut picker = open_picker();
	let apple = position_of(&picker, "Apple");
	let cherry = position_of(&picker, "Cherry");

	assert!(picker.select(apple));
	assert!(picker.select(cherry));
	assert!(picker.wait_for_encode(TIMEOUT));

	let names: Vec<_> = picker
		.host()
		.selections
		.iter()
		.map(|selection| selection.name.as_str())
		.collect();
	assert_eq!(names, vec!["Cherry"]);
}

#[test]
fn selection_uses_the_view_on_screen() {
	let mut picker = open_picker();
	picker.on_query_change("cher");
	assert!(picker.select(0), "filter still pending, full view visible");
	assert_eq!(picker.pending_selection(), Some("Apple"));
}

#[test]
fn ignored_while_closed_or_out_of_range() {
	let mut picker = PickerController::new(index(), RecordingHost::default()).expect("picker");
	assert!(!picker.select(0));
	picker.on_query_change("apple");
	assert_eq!(picker.query(), "");

	picker.open();
	assert!(!picker.select(99));
	assert_eq!(picker.state(), PickerState::Open);
}

#[test]
fn host_driven_hide_skips_the_close_callback() {
	let mut picker = open_picker();
	picker.on_query_change("a");
	picker.set_open(false);
	assert_eq!(picker.state(), PickerState::Closed);
	assert_eq!(picker.host().closes, 0);

	picker.set_open(true);
	assert_eq!(picker.query(), "");
}
