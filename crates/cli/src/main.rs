use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use parley_core::logging::{LogTarget, init_logging};
use parley_core::{ChatSession, Config};
use parley_ui::{App, AppState, Screen};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Parley - a two-party chat in the terminal
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(about = "A terminal chat where each message alternates between two participants", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to parley.toml (default: $PARLEY_CONFIG, then the user config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Open the chat screen (default)
    Chat,
    /// Open the join screen
    Join,
    /// Print the effective configuration as TOML
    Config {
        /// Print the commented example configuration instead
        #[arg(long)]
        example: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Chat);

    let source = Config::source(cli.config.as_deref());
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    match command {
        Commands::Config { example } => {
            let _guard = init_logging(&config.logging, LogTarget::Stderr).context("Failed to initialize logging")?;
            log_config_source(source.as_deref());
            cmd_config(&config, example, &mut std::io::stdout().lock())
        }
        Commands::Chat => cmd_tui(config, source.as_deref(), Screen::Chat),
        Commands::Join => cmd_tui(config, source.as_deref(), Screen::Join),
    }
}

fn log_config_source(source: Option<&Path>) {
    match source {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file, using defaults"),
    }
}

/// Write the effective or example configuration
fn cmd_config(config: &Config, example: bool, out: &mut impl Write) -> Result<()> {
    if example {
        out.write_all(Config::example().as_bytes())?;
    } else {
        let rendered = config.to_toml_string().context("Failed to render config")?;
        out.write_all(rendered.as_bytes())?;
    }
    Ok(())
}

/// Run one of the terminal screens until the user quits
fn cmd_tui(config: Config, source: Option<&Path>, screen: Screen) -> Result<()> {
    let _guard = init_logging(&config.logging, LogTarget::File).context("Failed to initialize logging")?;
    log_config_source(source);
    tracing::info!(?screen, "starting terminal UI");

    let state = build_state(config, screen);
    let mut app = App::new(state);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(app.run()).context("Terminal UI failed")?;

    tracing::info!(messages = app.state().session.transcript().len(), "terminal UI closed");
    Ok(())
}

fn build_state(config: Config, screen: Screen) -> AppState {
    let session = ChatSession::new(config.session);
    AppState::new(session, config.ui).with_screen(screen)
}
