use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `iconpick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "iconpick",
	version,
	long_version = long_version(),
	about = "Pick an icon in the terminal and print it as a data URI",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ICONPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'a',
		long,
		value_name = "DIR",
		help = "Load icons from a directory (default: <data dir>/icons, else the bundled set)"
	)]
	pub(crate) assets: Option<PathBuf>,
	#[arg(
		long = "extensions",
		value_delimiter = ',',
		value_name = "EXT",
		help = "File extensions treated as icons (default: svg)"
	)]
	pub(crate) extensions: Option<Vec<String>>,
	#[arg(
		short = 'H',
		long = "hidden",
		value_parser = BoolishValueParser::new(),
		help = "Include hidden files when scanning a directory (default: disabled)"
	)]
	pub(crate) hidden: Option<bool>,
	#[arg(
		short = 'd',
		long = "max-depth",
		value_name = "NUM",
		help = "Limit directory traversal depth (default: unlimited)"
	)]
	pub(crate) max_depth: Option<usize>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Number of grid columns (default: 5)"
	)]
	pub(crate) columns: Option<usize>,
	#[arg(
		long = "row-height",
		value_name = "ROWS",
		help = "Terminal rows per grid row (default: 3)"
	)]
	pub(crate) row_height: Option<u16>,
	#[arg(
		long = "chunk-size",
		value_name = "NUM",
		help = "Icons filtered between two input polls (default: 512)"
	)]
	pub(crate) chunk_size: Option<usize>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the dialog title (default: the picker.title label)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Level for the in-app log drawer: off, error, warn, info, debug, trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list",
		help = "List the icon names in catalog order and exit (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
