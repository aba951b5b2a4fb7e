mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use methematics::logging::{self, LogConfig, LogSink};
use methematics::terminal::theme;
use settings::ResolvedConfig;
use workflow::DivisorWorkflow;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;
	init_logging(&cli, &resolved);

	if cli.print_config {
		resolved.print_summary();
	}

	run_divisors(&cli, resolved)
}

/// Install the logger. Failing to log is reported but never stops the program.
fn init_logging(cli: &CliArgs, config: &ResolvedConfig) {
	let sink = if cli.evaluate.is_some() {
		Some(LogSink::Stderr)
	} else {
		config
			.log_file
			.clone()
			.or_else(|| logging::default_log_file().ok())
			.map(LogSink::File)
	};

	let Some(sink) = sink else {
		eprintln!("methematics: no location available for the log file, logging disabled");
		return;
	};

	let log_config = LogConfig {
		directive: config.log_directive.clone(),
		sink,
	};
	if let Err(err) = logging::initialize(&log_config) {
		eprintln!("methematics: logging disabled: {err:#}");
	}
}

/// Run the page (or a one-shot evaluation) and print output in the chosen format.
///
/// A refused one-shot evaluation exits with status 1.
fn run_divisors(cli: &CliArgs, settings: ResolvedConfig) -> Result<ExitCode> {
	let empty_message = settings.labels.empty_message.clone();
	let workflow = DivisorWorkflow::from_config(settings)?;
	let outcome = match &cli.evaluate {
		Some(text) => workflow.evaluate(text),
		None => workflow.run()?,
	};

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome, &empty_message),
		OutputFormat::Json => print_json(&outcome)?,
	}

	if cli.evaluate.is_some() && !outcome.accepted() {
		return Ok(ExitCode::FAILURE);
	}
	Ok(ExitCode::SUCCESS)
}
