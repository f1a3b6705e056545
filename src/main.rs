mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use iconpick::logging;
use workflow::PickerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.list {
		let workflow = PickerWorkflow::strict(resolved)?;
		for name in workflow.names() {
			println!("{name}");
		}
		return Ok(());
	}

	logging::initialize(resolved.log_level);
	let workflow = PickerWorkflow::from_config(resolved);
	let outcome = workflow.run()?;

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
