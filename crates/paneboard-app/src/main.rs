mod cli;
mod commands;
mod headless;

use std::process::ExitCode;

use paneboard_common::PaneboardError;
use paneboard_config::{PaneboardConfig, WorkspaceConfig};
use paneboard_webview::WorkspaceOptions;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

const DEFAULT_LOG_DIRECTIVE: &str = "paneboard=info";

fn load_config(args: &Args) -> Result<PaneboardConfig, PaneboardError> {
    let config = match &args.config {
        Some(path) => paneboard_config::load_from_path(path)?,
        None => paneboard_config::load_default()?,
    };
    Ok(config)
}

/// Build the log filter from `RUST_LOG` plus the CLI or configured level.
fn init_logging(args: &Args, config: Option<&PaneboardConfig>) {
    let directive = match (&args.log_level, config) {
        (Some(level), _) => level.clone(),
        (None, Some(config)) => format!("paneboard={}", config.logging.level.trim()),
        (None, None) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };

    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args, config: PaneboardConfig) -> Result<String, PaneboardError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let handle = runtime.handle().clone();

    match args.command {
        Command::Layout {
            template,
            orientation,
            width,
            height,
            gap,
            panes,
        } => commands::layout(
            &template,
            &orientation,
            (width, height),
            gap.unwrap_or(config.workspace.gap_px),
            panes,
        ),
        Command::Simulate {
            requests,
            crash,
            close,
            width,
            height,
        } => {
            let workspace = WorkspaceConfig {
                width: width.unwrap_or(config.workspace.width),
                height: height.unwrap_or(config.workspace.height),
                ..config.workspace
            };
            let options = WorkspaceOptions::from_config(&workspace);
            runtime.block_on(commands::simulate(
                &requests, &crash, &close, options, handle,
            ))
        }
        Command::Dashboard {
            path,
            width,
            height,
        } => runtime.block_on(commands::dashboard(&path, (width, height), handle)),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter;
    // problems are reported once the subscriber is up.
    let loaded = load_config(&args);
    init_logging(&args, loaded.as_ref().ok());

    tracing::info!("Paneboard v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => {
            if let Err(e) = paneboard_config::validation::validate(&config) {
                tracing::warn!("config validation warning: {e}");
            }
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            PaneboardConfig::default()
        }
    };

    match run(args, config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("paneboard: {e}");
            ExitCode::FAILURE
        }
    }
}
