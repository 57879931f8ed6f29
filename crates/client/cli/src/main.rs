//! Terminal client entry point.
mod app;
mod config;
mod input;
mod logging;
mod presentation;
mod state;

use anyhow::Result;
use app::App;
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // The TUI owns stdout, so logs only go to a file.
    let _log_guard = logging::setup_logging(config.session_id.as_deref())?;

    let content = config.load_content()?;

    App::new(config, content).run().await
}
