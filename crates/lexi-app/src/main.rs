use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lexi_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod alarm;
pub mod commands;
pub mod controller;
pub mod events;
pub mod notifier;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "lexi", version, about = "Surfaces vocabulary words as desktop notifications")]
struct Cli {
    /// Directory holding the persistent store
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the daemon (default)
    Run,
    /// Run a single alarm tick and exit
    Tick,
    /// Show the most recently presented word
    Current,
    /// Show or set the daily goal
    Goal { goal: Option<u32> },
    /// Show quota and progress counters
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::new();
    if let Some(dir) = cli.data_dir {
        config.store.data_dir = dir;
    }

    let state = Arc::new(AppState::init(config).await?);
    let mut out = std::io::stdout();

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run(state).await,
        Command::Tick => commands::tick(&state, &mut out).await,
        Command::Current => commands::current(&state, &mut out).await,
        Command::Goal { goal } => commands::goal(&state, goal, &mut out).await,
        Command::Status => commands::status(&state, &mut out).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    controller.install().await?;

    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("event loop exited"),
                Ok(Err(e)) => tracing::error!("event loop failed: {e}"),
                Err(e) => tracing::error!("event loop panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while tasks.join_next().await.is_some() {}
    Ok(())
}
