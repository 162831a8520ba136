//! Layered configuration: default files, `--config` files, `RANKVIEW__*`
//! environment variables, then command-line flags.

mod raw;
mod resolved;

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

pub(crate) use resolved::ResolvedConfig;

use crate::app_dirs;
use crate::cli::CliArgs;
use raw::RawConfig;

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	load_from(cli, defaults)
}

fn load_from(cli: &CliArgs, default_files: Vec<PathBuf>) -> Result<ResolvedConfig> {
	let builder = build_config(cli, default_files)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs, default_files: Vec<PathBuf>) -> Result<Config> {
	let mut builder = Config::builder();

	for path in default_files {
		builder = builder.add_source(File::from(path).required(false));
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix("rankview")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("ui.topk_choices"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".rankview.toml"));
		files.push(current_dir.join("rankview.toml"));
	}

	files
}
