use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use log::LevelFilter;
use serde::Deserialize;

use iconpick::app_dirs;
use iconpick::catalog::DEFAULT_EXTENSIONS;
use iconpick::grid::DEFAULT_COLUMN_COUNT;
use iconpick::labels::Labels;
use iconpick::logging;
use iconpick::search::DEFAULT_CHUNK_SIZE;
use iconpick::ui::{DEFAULT_ROW_HEIGHT, UiOptions};

use crate::cli::CliArgs;

use super::resolved::{CatalogSettings, ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use super::util::{label_key, sanitize_extensions};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	grid: GridSection,
	search: SearchSection,
	labels: HashMap<String, String>,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	root: Option<PathBuf>,
	extensions: Option<Vec<String>>,
	include_hidden: Option<bool>,
	respect_ignore: Option<bool>,
	max_depth: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct GridSection {
	columns: Option<usize>,
	row_height: Option<u16>,
	title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	chunk_size: Option<usize>,
	initial_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(root) = cli.assets.clone() {
			self.catalog.root = Some(root);
		}
		if let Some(value) = &cli.extensions {
			self.catalog.extensions = Some(value.clone());
		}
		if let Some(value) = cli.hidden {
			self.catalog.include_hidden = Some(value);
		}
		if let Some(value) = cli.max_depth {
			self.catalog.max_depth = Some(value);
		}

		if let Some(value) = cli.columns {
			self.grid.columns = Some(value);
		}
		if let Some(value) = cli.row_height {
			self.grid.row_height = Some(value);
		}
		if let Some(title) = cli.title.clone() {
			self.grid.title = Some(title);
		}

		if let Some(value) = cli.chunk_size {
			self.search.chunk_size = Some(value);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.search.initial_query = Some(query);
		}

		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources::from_cli(cli);

		let root = match self.catalog.root {
			Some(root) => Some(resolve_root(root)?),
			None => default_icon_dir(),
		};
		let extensions = self
			.catalog
			.extensions
			.map(sanitize_extensions)
			.filter(|exts| !exts.is_empty())
			.unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect());
		let catalog = CatalogSettings {
			root,
			extensions,
			include_hidden: self.catalog.include_hidden.unwrap_or(false),
			respect_ignore: self.catalog.respect_ignore.unwrap_or(false),
			max_depth: self.catalog.max_depth,
		};

		let labels = Labels::default().with_overrides(
			self.labels
				.into_iter()
				.map(|(key, value)| (label_key(&key), value)),
		);
		let ui = UiOptions {
			columns: self.grid.columns.unwrap_or(DEFAULT_COLUMN_COUNT),
			row_height: self.grid.row_height.unwrap_or(DEFAULT_ROW_HEIGHT),
			chunk_size: self.search.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
			initial_query: self.search.initial_query.unwrap_or_default(),
			labels,
			title: self.grid.title.filter(|title| !title.trim().is_empty()),
		};

		let log_level = match self.logging.level {
			Some(level) => logging::parse_level(&level).ok_or_else(|| {
				ConfigError::invalid(
					"logging.level",
					level.clone(),
					sources.source_for_log_level(),
					"expected off, error, warn, info, debug or trace",
				)
			})?,
			None => LevelFilter::Info,
		};

		let resolved = ResolvedConfig {
			catalog,
			ui,
			log_level,
		};
		resolved.validate(&sources)?;
		Ok(resolved)
	}
}

fn resolve_root(mut root: PathBuf) -> Result<PathBuf> {
	if root.is_relative() {
		root = env::current_dir()
			.context("failed to resolve current directory for the asset root")?
			.join(root);
	}
	root = fs::canonicalize(&root)
		.with_context(|| format!("failed to canonicalize asset root {}", root.display()))?;

	let metadata = fs::metadata(&root)
		.with_context(|| format!("failed to inspect asset root {}", root.display()))?;
	ensure!(metadata.is_dir(), "asset root must be a directory");
	Ok(root)
}

/// `<data dir>/icons` when the user has installed an icon pack there.
fn default_icon_dir() -> Option<PathBuf> {
	let dir = app_dirs::get_data_dir().ok()?.join("icons");
	dir.is_dir().then_some(dir)
}
