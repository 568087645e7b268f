use std::process::ExitCode;

use log::{Level, error, log_enabled};
use uptime_probe::config::Config;
use uptime_probe::error::ProbeError;
use uptime_probe::server;

const DEFAULT_LOG_FILTER: &str = "info,actix_server=warn";

/// Uptime Probe Entry Point
///
/// Starts the liveness server that an external uptime monitor polls to keep
/// the bot's host from idling it out.
///
/// # Endpoints
/// - `GET /`: plain text liveness check
/// - `GET /status`: JSON status with version and timestamp
///
/// # Configuration
/// - Binds to `0.0.0.0:3000` unless `UPTIME_HOST` / `UPTIME_PORT` say otherwise
/// - Environment variables loaded from `.env` file (if present)
/// - Logs to stdout; `RUST_LOG` overrides the default filter
///
/// Any startup failure (bad configuration, port in use) is logged and the
/// process exits with status 1.
#[actix_web::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .target(env_logger::Target::Stdout)
        .init();

    ExitCode::from(exit_status(start().await))
}

async fn start() -> Result<(), ProbeError> {
    let config = Config::from_env()?;
    server::serve(config).await
}

/// Reports a startup failure and maps the outcome to the process status.
fn exit_status(result: Result<(), ProbeError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            // RUST_LOG=off still gets the diagnostic.
            if log_enabled!(Level::Error) {
                error!("{e}");
            } else {
                eprintln!("uptime-probe: {e}");
            }
            1
        }
    }
}
