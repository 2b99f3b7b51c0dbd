use clap::Parser;
use focus_guard_domain::CliOverrides;
use std::sync::Arc;
use tracing::debug;

mod bootstrap;
mod commands;
mod di;
mod navigator;

use navigator::ConsoleNavigator;

#[derive(Parser)]
#[command(name = "focus-guard")]
#[command(version)]
#[command(about = "Focus Guard - block distracting websites during work hours")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Blocklist and settings store path
    #[arg(long, value_name = "FILE")]
    store: Option<String>,

    /// Blocking page URL
    #[arg(long)]
    redirect_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        store_path: cli.store,
        log_level: cli.log_level,
        redirect_url: cli.redirect_url,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!("Starting Focus Guard v{}", env!("CARGO_PKG_VERSION"));

    let navigator = Arc::new(ConsoleNavigator::new());
    let repos = di::Repositories::new(&config);
    let use_cases = di::UseCases::new(&repos, &config, navigator.clone());

    commands::run(cli.command, &use_cases, navigator).await
}
