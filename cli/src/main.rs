use std::error::Error;

use clap::Parser;
use tracing::{error, info};

use cli::bootstrap::state::AppState;
use cli::commands::{self, Cli};
use cli::config_loader;
use cli::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config_loader::load_config()?;

    observability::tracing::setup_logging(&config)?;
    observability::startup_info::print_startup_info(&config);

    let state = AppState::new(&config, cli.command.image_path())?;

    if let Err(e) = commands::run(cli.command, &state).await {
        error!("{}", e);
        return Err(e.into());
    }

    if state.screen.navigation_count() > 0 {
        info!("Main screen reached");
    }
    Ok(())
}
