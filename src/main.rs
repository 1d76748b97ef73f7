use anyhow::{Context, Result};
use sessiondesk::backend::create_backend;
use sessiondesk::config::Config;
use sessiondesk::logger::Logger;
use sessiondesk::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;

    let logger = Logger::from_config(&config.logging)?;
    logger.install(config.logging.level_filter()?)?;
    log::info!("Starting sessiondesk with {} backend", config.backend.kind);

    let backend = create_backend(&config.backend.kind, &config.backend).await?;

    // Run the TUI application
    ui::run_app(config, logger, backend).await?;

    Ok(())
}
