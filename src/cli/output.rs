use anyhow::Result;
use iconpick::PickerOutcome;
use serde_json::json;

/// Print the data URI of the selection, or a note when cancelled.
pub(crate) fn print_plain(outcome: &PickerOutcome) {
	if !outcome.accepted {
		println!("Selection cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(selection) => println!("{}", selection.data_uri),
		None => println!("No selection"),
	}
}

pub(crate) fn format_outcome_json(outcome: &PickerOutcome) -> Result<String> {
	let (name, data_uri) = match &outcome.selection {
		Some(selection) => (json!(selection.name), json!(selection.data_uri)),
		None => (serde_json::Value::Null, serde_json::Value::Null),
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"name": name,
		"data_uri": data_uri,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &PickerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
