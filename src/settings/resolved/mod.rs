use std::path::PathBuf;

use iconpick::catalog::{AssetSource, BundledAssets, DirectoryAssets};
use iconpick::ui::UiOptions;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where icons are loaded from.
#[derive(Debug, Clone)]
pub struct CatalogSettings {
	/// `None` selects the bundled icon set.
	pub root: Option<PathBuf>,
	pub extensions: Vec<String>,
	pub include_hidden: bool,
	/// Apply `.gitignore` style rules while walking `root`.
	pub respect_ignore: bool,
	pub max_depth: Option<usize>,
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub catalog: CatalogSettings,
	pub ui: UiOptions,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}

	/// The asset source the catalog should be built from.
	pub fn asset_source(&self) -> Box<dyn AssetSource> {
		match &self.catalog.root {
			Some(root) => Box::new(
				DirectoryAssets::new(root)
					.with_extensions(self.catalog.extensions.iter().cloned())
					.include_hidden(self.catalog.include_hidden)
					.respect_ignore(self.catalog.respect_ignore)
					.max_depth(self.catalog.max_depth),
			),
			None => Box::new(BundledAssets),
		}
	}
}
