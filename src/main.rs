//! Entry point for poster-fill.
use std::process::ExitCode;

use anyhow::Error;
use clap::Parser;
use poster_fill::{
    cli::{execute_check, CheckArgs},
    config::CheckerConfig,
    lib::telemetry,
};

/// Exit code for failures that prevent any check from running.
const FATAL_EXIT_CODE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => ExitCode::from(code),
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<u8, DriverExit> {
    telemetry::init_tracing().map_err(DriverExit::from_error)?;
    let args = CheckArgs::parse();
    let profile = args.into_profile().map_err(DriverExit::from_error)?;
    let config = CheckerConfig::load(profile.config_path.clone(), profile.config_source)
        .map_err(|err| DriverExit::from_error(Error::new(err)))?;

    execute_check(&profile, &config)
        .await
        .map_err(DriverExit::from_error)
}

/// Bundles a fatal error message with the exit code it maps to.
#[derive(Debug)]
struct DriverExit {
    message: String,
    exit_code: u8,
}

impl DriverExit {
    fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: FATAL_EXIT_CODE,
        }
    }

    fn report(self) -> ExitCode {
        eprintln!("ERROR: {}", self.message);
        ExitCode::from(self.exit_code)
    }
}
