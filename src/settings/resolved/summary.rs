use iconpick::labels::{Translate, keys};

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match &config.catalog.root {
		Some(root) => println!("  Asset root: {}", root.display()),
		None => println!("  Asset root: (bundled icons)"),
	}
	println!("  Extensions: {}", config.catalog.extensions.join(", "));
	println!(
		"  Include hidden: {}",
		bool_to_word(config.catalog.include_hidden)
	);
	println!(
		"  Respect ignore files: {}",
		bool_to_word(config.catalog.respect_ignore)
	);
	match config.catalog.max_depth {
		Some(depth) => println!("  Max depth: {depth}"),
		None => println!("  Max depth: unlimited"),
	}
	println!("  Columns: {}", config.ui.columns);
	println!("  Row height: {}", config.ui.row_height);
	println!("  Filter chunk size: {}", config.ui.chunk_size);
	if !config.ui.initial_query.is_empty() {
		println!("  Initial query: {}", config.ui.initial_query);
	}
	println!(
		"  Title: {}",
		config
			.ui
			.title
			.clone()
			.unwrap_or_else(|| config.ui.labels.translate(keys::TITLE))
	);
	println!("  Log level: {}", config.log_level);
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use iconpick::ui::UiOptions;
	use log::LevelFilter;

	use super::super::CatalogSettings;
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			catalog: CatalogSettings {
				root: Some(PathBuf::from("/tmp/icons")),
				extensions: vec!["svg".into(), "png".into()],
				include_hidden: true,
				respect_ignore: false,
				max_depth: Some(2),
			},
			ui: UiOptions {
				initial_query: "lock".into(),
				..UiOptions::default()
			},
			log_level: LevelFilter::Debug,
		};

		print_summary(&config);
	}
}
