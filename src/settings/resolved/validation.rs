use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.ui.columns == 0 {
		return Err(ConfigError::invalid(
			"grid.columns",
			config.ui.columns.to_string(),
			sources.source_for_columns(),
			"must be greater than zero",
		));
	}

	if config.ui.row_height == 0 {
		return Err(ConfigError::invalid(
			"grid.row_height",
			config.ui.row_height.to_string(),
			sources.source_for_row_height(),
			"must be greater than zero",
		));
	}

	if config.ui.chunk_size == 0 {
		return Err(ConfigError::invalid(
			"search.chunk_size",
			config.ui.chunk_size.to_string(),
			sources.source_for_chunk_size(),
			"must be greater than zero",
		));
	}

	if let Some(max_depth) = config.catalog.max_depth
		&& max_depth == 0
	{
		return Err(ConfigError::invalid(
			"catalog.max_depth",
			max_depth.to_string(),
			sources.source_for_max_depth(),
			"must be at least 1",
		));
	}

	Ok(())
}
