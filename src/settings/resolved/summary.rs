use std::fmt::Write;

use methematics::logging;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", render_summary(config));
}

fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(out, "  Title: {}", config.labels.title);
	let _ = writeln!(out, "  Placeholder: {}", config.labels.placeholder);
	let _ = writeln!(out, "  Empty message: {}", config.labels.empty_message);
	if !config.initial_input.is_empty() {
		let _ = writeln!(out, "  Initial input: {}", config.initial_input);
	}
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	match &config.guidelines_path {
		Some(path) => {
			let _ = writeln!(out, "  Guidelines: {}", path.display());
		}
		None => out.push_str("  Guidelines: (bundled)\n"),
	}
	let _ = writeln!(
		out,
		"  Log level: {}",
		config.log_directive.as_deref().unwrap_or("warn")
	);
	match &config.log_file {
		Some(path) => {
			let _ = writeln!(out, "  Log file: {}", path.display());
		}
		None => match logging::default_log_file() {
			Ok(path) => {
				let _ = writeln!(out, "  Log file: {}", path.display());
			}
			Err(_) => out.push_str("  Log file: (unavailable)\n"),
		},
	}
	out
}
