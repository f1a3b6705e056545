use std::collections::HashSet;

/// Normalize and deduplicate file extensions provided by the user.
pub(super) fn sanitize_extensions(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let normalized = value.trim().trim_start_matches('.').to_ascii_lowercase();
		if normalized.is_empty() {
			continue;
		}
		if seen.insert(normalized.clone()) {
			cleaned.push(normalized);
		}
	}
	cleaned
}

/// Expand a `[labels]` key to a full label key: `search` -> `picker.search`.
pub(super) fn label_key(key: &str) -> String {
	let key = key.trim();
	if key.contains('.') {
		key.to_string()
	} else {
		format!("picker.{key}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extensions_are_cleaned_and_deduplicated() {
		let cleaned =
			sanitize_extensions(vec![" .SVG ".into(), "svg".into(), "".into(), ".Png".into()]);
		assert_eq!(cleaned, vec!["svg", "png"]);
	}

	#[test]
	fn short_label_keys_gain_the_picker_prefix() {
		assert_eq!(label_key("search"), "picker.search");
		assert_eq!(label_key(" no_results "), "picker.no_results");
		assert_eq!(label_key("modals.cancel"), "modals.cancel");
	}
}
