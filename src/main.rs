use std::process::ExitCode;

use anyhow::{Context, Result};
use skyward_dash::app::App;
use skyward_dash::constants::LOOP_TIME;
use skyward_dash::platform;
use tracing::{error, info};

fn run() -> Result<()> {
    let mut app = App::new().context("Could not create app")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run().context("Frame failed")? {}

    info!("Goodbye");
    Ok(())
}

/// The main entry point of the application.
pub fn main() -> ExitCode {
    if let Err(e) = platform::init_logging() {
        eprintln!("Could not initialize logging: {e}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
