use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use paneboard_tiling::{ParseSizeClassError, SizeClass};

/// Paneboard: a slot-based workspace and dashboard host for browser panes.
#[derive(Parser, Debug)]
#[command(name = "paneboard", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error, or a filter
    /// directive such as `paneboard_webview=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the pane rectangles of a layout template as JSON.
    Layout {
        /// QUAD, HALF or MIX_3.
        #[arg(long, default_value = "QUAD")]
        template: String,

        /// Horizontal or Vertical (HALF only).
        #[arg(long, default_value = "Vertical")]
        orientation: String,

        #[arg(long, default_value_t = 1920)]
        width: i32,

        #[arg(long, default_value_t = 1080)]
        height: i32,

        /// Gap in pixels. Defaults to the configured workspace gap.
        #[arg(long)]
        gap: Option<i32>,

        #[arg(long, default_value_t = 4)]
        panes: usize,
    },

    /// Admit panes into a headless workspace and print what happened.
    Simulate {
        /// Pane requests as SIZE=ADDRESS, e.g. `half=example.com`.
        #[arg(required = true)]
        requests: Vec<PaneRequest>,

        /// Report a renderer crash for this pane number after activation.
        #[arg(long)]
        crash: Vec<u32>,

        /// Remove this pane number after activation.
        #[arg(long)]
        close: Vec<u32>,

        #[arg(long)]
        width: Option<i32>,

        #[arg(long)]
        height: Option<i32>,
    },

    /// Open a dashboard file (TOML or JSON) headlessly and print its layout.
    Dashboard {
        path: PathBuf,

        #[arg(long, default_value_t = 1920)]
        width: i32,

        #[arg(long, default_value_t = 1080)]
        height: i32,
    },
}

/// One `SIZE=ADDRESS` admission request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneRequest {
    pub size: SizeClass,
    pub address: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PaneRequestError {
    #[error("expected SIZE=ADDRESS, got '{0}'")]
    Format(String),

    #[error(transparent)]
    Size(#[from] ParseSizeClassError),
}

impl FromStr for PaneRequest {
    type Err = PaneRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (size, address) = s
            .split_once('=')
            .ok_or_else(|| PaneRequestError::Format(s.to_string()))?;
        Ok(Self {
            size: size.parse()?,
            address: address.to_string(),
        })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
