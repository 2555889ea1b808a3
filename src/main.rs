//! keyux: command-line host for the keyboard UX helpers
//!
//! - `hint` formats key combos for the configured platform
//! - `check` reports whether a physical keyboard is likely present
//! - `run` starts the hint plugin and echoes hints for combos read from stdin

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use keyux::host::run_session;
use keyux::lifecycle::ShutdownSignal;
use keyux::plugin::HintEcho;
use keyux::{format_hint, likely_with_keyboard, start_key_ux, Config, Plugin};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Platform identifier (overrides KEYUX_PLATFORM)
    #[arg(long, global = true)]
    platform: Option<String>,

    /// User agent (overrides KEYUX_USER_AGENT)
    #[arg(long, global = true)]
    user_agent: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the display hint for each combo
    Hint {
        /// Key-combo identifiers, e.g. ctrl+shift+s
        #[arg(required = true)]
        combos: Vec<String>,
    },
    /// Report whether a physical keyboard is likely present
    Check,
    /// Echo hints for combos read from stdin, one per line
    Run,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(platform) = cli.platform {
        config.platform = platform;
    }
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = user_agent;
    }
    info!(
        platform = %config.platform,
        overrides = config.overrides.len(),
        "configuration loaded"
    );

    let env = config.environment();

    match cli.command {
        Commands::Hint { combos } => {
            for combo in &combos {
                println!("{}", format_hint(&env, combo, &config.overrides));
            }
        }
        Commands::Check => {
            println!("{}", likely_with_keyboard(&env));
        }
        Commands::Run => {
            let (hint_tx, mut hint_rx) = mpsc::unbounded_channel();
            let plugins: Vec<Box<dyn Plugin>> =
                vec![Box::new(HintEcho::new(config.overrides.clone(), hint_tx))];
            let stop_all = start_key_ux(&env, &plugins)?;

            let shutdown = ShutdownSignal::new();
            let result = run_session(
                &env,
                BufReader::new(tokio::io::stdin()),
                &mut hint_rx,
                tokio::io::stdout(),
                async {
                    if let Err(e) = shutdown.wait().await {
                        error!(?e, "failed to register signal handlers");
                        std::future::pending::<()>().await;
                    }
                    info!("shutdown signal received");
                },
            )
            .await;

            stop_all.stop();
            result?;
        }
    }

    Ok(())
}
