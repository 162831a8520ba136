use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ThemeArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `rankview` binary.
#[derive(Parser, Debug)]
#[command(
	name = "rankview",
	version,
	long_version = long_version(),
	about = "Compare BM25 retrieval with SBERT re-ranking side by side",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "RANKVIEW_CONFIG",
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
		short,
		long,
		value_name = "URL",
		env = "RANKVIEW_ENDPOINT",
		help = "Search endpoint to POST queries to (default: http://127.0.0.1:7860/search)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Give up on a request after this many seconds (default: no timeout)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Query to pre-fill, or to run with --once (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'k',
		long,
		value_name = "N",
		help = "Number of results requested per ranking (default: 5)"
	)]
	pub(crate) topk: Option<u32>,
	#[arg(
		long = "topk-choices",
		value_delimiter = ',',
		value_name = "N",
		help = "Comma-separated top-k values offered by Ctrl+T (default: 5,10,20)"
	)]
	pub(crate) topk_choices: Option<Vec<u32>>,
	#[arg(
		long,
		value_enum,
		help = "Start with this theme instead of the persisted one (default: persisted)"
	)]
	pub(crate) theme: Option<ThemeArg>,
	#[arg(
		long = "status-clear-ms",
		value_name = "MS",
		help = "How long a finished search's status stays visible (default: 2500)"
	)]
	pub(crate) status_clear_ms: Option<u64>,
	#[arg(
		long,
		requires = "query",
		help = "Run a single search without the terminal UI and print both rankings"
	)]
	pub(crate) once: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how --once prints the rankings"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
}
