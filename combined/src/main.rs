//! `app-settings`: load, validate and inspect backend settings, or serve
//! the HTTP gateway with them.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use settings::Settings;
use tracing::{debug, error};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_handle = logging::init(cli.verbose);

    let options = cli.load_options();
    debug!(
        env_file = %options.env_file.display(),
        base_dir = %options.base_dir.display(),
        "Loading settings"
    );

    let settings = match Settings::load(&options) {
        Ok(settings) => settings,
        Err(e) => {
            commands::report_config_error(&e);
            std::process::exit(1);
        }
    };
    logging::apply_settings(&log_handle, &settings, cli.verbose);

    let result = match &cli.command {
        Commands::Check => commands::check(&settings),
        Commands::Show => commands::show(&settings),
        Commands::Urls(args) => commands::urls(&settings, args),
        Commands::Ping => commands::ping(&settings).await,
        Commands::Serve(args) => commands::serve(settings, args).await,
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
