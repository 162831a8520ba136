mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::parse_cli;
use workflow::SearchWorkflow;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	let data_dir = app_dirs::get_data_dir().ok();
	let _log_guard = if cli.once {
		logging::init_stderr();
		None
	} else {
		match &data_dir {
			Some(dir) => logging::init_file(&dir.join("logs")).ok(),
			None => None,
		}
	};

	let resolved = settings::load(&cli)?;
	if cli.print_config {
		resolved.print_summary();
	}
	tracing::debug!(endpoint = %resolved.endpoint, "configuration loaded");

	let workflow = SearchWorkflow::from_config(resolved)?;
	if cli.once {
		let failed = workflow.run_once(cli.output)?;
		return Ok(if failed {
			ExitCode::FAILURE
		} else {
			ExitCode::SUCCESS
		});
	}

	workflow.run_interactive(data_dir.as_deref())?;
	Ok(ExitCode::SUCCESS)
}
