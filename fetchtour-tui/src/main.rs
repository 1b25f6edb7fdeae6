use anyhow::{Context, Result};
use fetchtour_core::TourConfig;
use fetchtour_tui::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = TourConfig::load().context("Failed to load configuration")?;
    logging::init_file_logging(&logging::log_path(), config.log_filter())?;

    if let Err(err) = fetchtour_tui::run(&config).await {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}
