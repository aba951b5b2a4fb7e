use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `methematics` binary.
#[derive(Parser, Debug)]
#[command(
	name = "methematics",
	version,
	long_version = long_version(),
	about = "Find all the possible divisors of a given number.",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "METHEMATICS_CONFIG",
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
		short = 'i',
		long = "initial",
		value_name = "NUMBER",
		allow_hyphen_values = true,
		help = "Pre-fill the input with a number (default: empty)"
	)]
	pub(crate) initial_input: Option<String>,
	#[arg(
		short = 'e',
		long = "evaluate",
		value_name = "NUMBER",
		allow_hyphen_values = true,
		help = "Submit a number without opening the interface and print the result"
	)]
	pub(crate) evaluate: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the heading shown above the input (default: Methematics)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the input placeholder (default: Give me a number)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'g',
		long,
		value_name = "FILE",
		help = "Read guidelines from a JSON file instead of the bundled table"
	)]
	pub(crate) guidelines: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_name = "DIRECTIVE",
		help = "Set the log filter directive (default: warn)"
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
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
