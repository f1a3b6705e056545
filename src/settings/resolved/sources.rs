use std::env;
use std::fmt;

use crate::cli::CliArgs;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) grid_columns: Option<SettingSource>,
	pub(crate) grid_row_height: Option<SettingSource>,
	pub(crate) search_chunk_size: Option<SettingSource>,
	pub(crate) catalog_max_depth: Option<SettingSource>,
	pub(crate) logging_level: Option<SettingSource>,
}

fn origin(
	from_cli: bool,
	flag: &'static str,
	var: &'static str,
) -> Option<SettingSource> {
	if from_cli {
		Some(SettingSource::CliFlag(flag))
	} else if env::var_os(var).is_some() {
		Some(SettingSource::Environment(var))
	} else {
		None
	}
}

impl ConfigSources {
	pub(crate) fn from_cli(cli: &CliArgs) -> Self {
		Self {
			grid_columns: origin(cli.columns.is_some(), "--columns", "ICONPICK__GRID__COLUMNS"),
			grid_row_height: origin(
				cli.row_height.is_some(),
				"--row-height",
				"ICONPICK__GRID__ROW_HEIGHT",
			),
			search_chunk_size: origin(
				cli.chunk_size.is_some(),
				"--chunk-size",
				"ICONPICK__SEARCH__CHUNK_SIZE",
			),
			catalog_max_depth: origin(
				cli.max_depth.is_some(),
				"--max-depth",
				"ICONPICK__CATALOG__MAX_DEPTH",
			),
			logging_level: origin(
				cli.log_level.is_some(),
				"--log-level",
				"ICONPICK__LOGGING__LEVEL",
			),
		}
	}

	pub(crate) fn source_for_columns(&self) -> SettingSource {
		self.grid_columns
			.clone()
			.unwrap_or(SettingSource::ConfigKey("grid.columns"))
	}

	pub(crate) fn source_for_row_height(&self) -> SettingSource {
		self.grid_row_height
			.clone()
			.unwrap_or(SettingSource::ConfigKey("grid.row_height"))
	}

	pub(crate) fn source_for_chunk_size(&self) -> SettingSource {
		self.search_chunk_size
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.chunk_size"))
	}

	pub(crate) fn source_for_max_depth(&self) -> SettingSource {
		self.catalog_max_depth
			.clone()
			.unwrap_or(SettingSource::ConfigKey("catalog.max_depth"))
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		self.logging_level
			.clone()
			.unwrap_or(SettingSource::ConfigKey("logging.level"))
	}
}
