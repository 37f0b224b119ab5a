mod config;
mod error;
mod form;
mod paths;
mod script;

use std::fs::{self, File};
use std::process::ExitCode;

use clap::Parser;
use log::info;
use simplelog::{Config, WriteLogger};

use config::{Args, CliConfig};
use error::CliError;
use form::SignupForm;

/// Exit code when the script ran but the form was never accepted.
const NOT_ACCEPTED: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(NOT_ACCEPTED),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool, CliError> {
    let config = CliConfig::from(Args::parse());
    init_logging(&config)?;

    let steps = script::load(&config.script)?;
    info!(
        "replaying {} steps from {}",
        steps.len(),
        config.script.display()
    );

    let mut form = SignupForm::new();
    for step in steps {
        form.apply(step)?;
    }

    println!("{}", serde_json::to_string_pretty(&form.report())?);
    Ok(form.accepted())
}

fn init_logging(config: &CliConfig) -> Result<(), CliError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(CliError::LogFile)?;
    }
    let archived = paths::rotate_logs(path, paths::KEPT_LOGS);

    let log_file = File::create(path).map_err(CliError::LogFile)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    if let Some(previous) = archived {
        info!("previous log archived to {}", previous.display());
    }
    Ok(())
}
