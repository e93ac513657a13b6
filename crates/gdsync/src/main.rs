//! gdsync - GoDaddy A-record synchronizer
//!
//! The binary is a thin shell around `gdsync-core`: it parses and validates
//! the command line, sets up logging, runs one reconciliation pass and
//! prints the resulting report as JSON. All decision logic lives in the
//! core crate.
//!
//! Logging verbosity is controlled with the `GDSYNC_LOG_LEVEL` environment
//! variable (trace, debug, info, warn, error; default info).

use std::env;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use gdsync_core::{UpdateOption, Updater};
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;

mod cli;

const LICENSE_NOTICE: &str = "gdsync is licensed under the Apache License, Version 2.0.\n\
Run `gdsync license --full` for the complete text.";

/// Exit codes for the different termination scenarios
#[derive(Debug, Clone, Copy)]
enum GdsyncExitCode {
    /// Clean exit
    Success = 0,
    /// Startup failure before any request was made
    StartupError = 1,
    /// The reconciliation call failed
    UpdateError = 2,
}

impl From<GdsyncExitCode> for ExitCode {
    fn from(code: GdsyncExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    let app = cli::App::parse();

    let log_level = match env::var("GDSYNC_LOG_LEVEL")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {}", e);
        return GdsyncExitCode::StartupError.into();
    }

    match app.command {
        cli::Command::Update(args) => {
            let rt = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("failed to create tokio runtime: {}", e);
                    return GdsyncExitCode::StartupError.into();
                }
            };

            match rt.block_on(run_update(args)) {
                Ok(()) => GdsyncExitCode::Success.into(),
                Err(e) => {
                    error!("{:#}", e);
                    GdsyncExitCode::UpdateError.into()
                }
            }
        }
        cli::Command::License { full } => {
            if full {
                print!("{}", include_str!("../../../LICENSE"));
            } else {
                println!("{}", LICENSE_NOTICE);
            }
            GdsyncExitCode::Success.into()
        }
    }
}

/// Run one reconciliation pass and print its report to stdout.
async fn run_update(args: cli::UpdateArgs) -> Result<()> {
    let mut options = vec![
        UpdateOption::Endpoint(args.endpoint),
        UpdateOption::DryRun(args.dry_run),
        UpdateOption::AuthKey(args.auth_key),
        UpdateOption::AuthSecret(args.auth_secret),
    ];
    options.extend(args.record_names.into_iter().map(UpdateOption::RecordName));

    let report = Updater::new()
        .check_and_update(&args.domain, &args.ip.to_string(), options)
        .await?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
