//! Display strings looked up by key.

use std::collections::HashMap;

/// Keys understood by the picker.
pub mod keys {
	/// Label of the search field.
	pub const SEARCH: &str = "picker.search";
	/// Message shown when the query matches nothing.
	pub const NO_RESULTS: &str = "picker.no_results";
	/// Dialog title.
	pub const TITLE: &str = "picker.title";
	/// Status while a filter is running.
	pub const FILTERING: &str = "picker.filtering";
	/// Status while a selection is being encoded.
	pub const ENCODING: &str = "picker.encoding";
	/// Result count, `{count}` is replaced with the number of icons.
	pub const COUNT: &str = "picker.count";
	/// Key hints shown in the footer.
	pub const HINT: &str = "picker.hint";
}

/// Localization lookup used by the picker.
pub trait Translate {
	/// Return the text for `key`.
	fn translate(&self, key: &str) -> String;
}

/// A key/value table with English defaults.
#[derive(Debug, Clone)]
pub struct Labels {
	entries: HashMap<String, String>,
}

impl Default for Labels {
	fn default() -> Self {
		let entries = [
			(keys::SEARCH, "Search"),
			(keys::NO_RESULTS, "No results"),
			(keys::TITLE, "Choose an icon"),
			(keys::FILTERING, "Filtering"),
			(keys::ENCODING, "Encoding"),
			(keys::COUNT, "{count} icons"),
			(keys::HINT, "Enter select · Esc cancel · Ctrl+L logs"),
		]
		.into_iter()
		.map(|(key, value)| (key.to_string(), value.to_string()))
		.collect();
		Self { entries }
	}
}

impl Labels {
	/// Replace or add entries, ignoring blank values.
	#[must_use]
	pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		for (key, value) in overrides {
			let value = value.into();
			if value.trim().is_empty() {
				continue;
			}
			self.entries.insert(key.into(), value);
		}
		self
	}

	/// Result count label for `count` icons.
	pub fn count(&self, count: usize) -> String {
		self.translate(keys::COUNT)
			.replace("{count}", &count.to_string())
	}
}

impl Translate for Labels {
	fn translate(&self, key: &str) -> String {
		self.entries
			.get(key)
			.cloned()
			.unwrap_or_else(|| key.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_cover_every_key() {
		let labels = Labels::default();
		for key in [
			keys::SEARCH,
			keys::NO_RESULTS,
			keys::TITLE,
			keys::FILTERING,
			keys::ENCODING,
			keys::COUNT,
			keys::HINT,
		] {
			assert_ne!(labels.translate(key), key);
		}
	}

	#[test]
	fn overrides_replace_defaults_but_skip_blanks() {
		let labels = Labels::default().with_overrides([
			(keys::SEARCH, "Suchen"),
			(keys::NO_RESULTS, "  "),
		]);
		assert_eq!(labels.translate(keys::SEARCH), "Suchen");
		assert_eq!(labels.translate(keys::NO_RESULTS), "No results");
	}

	#[test]
	fn unknown_keys_fall_back_to_the_key() {
		assert_eq!(Labels::default().translate("modals.cancel"), "modals.cancel");
	}

	#[test]
	fn count_substitutes_the_number() {
		assert_eq!(Labels::default().count(18), "18 icons");
	}
}
