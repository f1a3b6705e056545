//! Log capture for the terminal picker.
//!
//! Records go through the `log` facade into `tui-logger`. Its own background
//! thread moves them into the history shown by the log drawer, so nothing is
//! written to stderr while the alternate screen is active.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `tui-logger` backend at `level`.
///
/// Safe to call more than once; later calls only adjust the level.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		if let Err(err) = tui_logger::init_logger(LevelFilter::Trace) {
			eprintln!("iconpick: logging unavailable: {err}");
		}
	});
	tui_logger::set_default_level(level);
	log::set_max_level(level);
}

/// Parse a level name such as `info` or `TRACE`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_names_are_case_insensitive() {
		assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
		assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
		assert_eq!(parse_level("off"), Some(LevelFilter::Off));
		assert_eq!(parse_level("loud"), None);
	}

	#[test]
	fn repeated_initialization_is_harmless() {
		initialize(LevelFilter::Info);
		initialize(LevelFilter::Debug);
		assert_eq!(log::max_level(), LevelFilter::Debug);
	}
}
