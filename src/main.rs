//! Vacation pay HTTP server.
//!
//! Reads the configuration file named by `VACATION_PAY_CONFIG` (default
//! `./config/service.yaml`), installs the log subscriber and serves the API.

use std::io;
use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info};

use vacation_pay::api::{AppState, create_router};
use vacation_pay::calculation::HolidayCalendar;
use vacation_pay::config::ConfigLoader;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ConfigLoader::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .compact()
        .with_max_level(config.log_level())
        .with_thread_names(true)
        .with_writer(io::stdout)
        .init();

    match serve(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("server terminated: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: &ConfigLoader) -> io::Result<()> {
    let address = config.server().bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(address = %address, "Vacation pay service listening");

    let router = create_router(AppState::new(HolidayCalendar::statutory()));
    axum::serve(listener, router).await
}
