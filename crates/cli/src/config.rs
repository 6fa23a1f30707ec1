use crate::args::Args;
use crate::error::{AppError, Result};
use crate::presentation::TableStyle;
use linetally_engine::config::Config;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Everything a run needs, resolved from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    pub style: TableStyle,
}

impl AppConfig {
    pub fn for_root(root: impl Into<PathBuf>, style: TableStyle) -> Self {
        Self {
            engine: Config::for_root(root),
            style,
        }
    }
}

impl TryFrom<Args> for AppConfig {
    type Error = AppError;

    fn try_from(_args: Args) -> Result<Self> {
        let root = std::env::current_dir().map_err(AppError::CurrentDir)?;
        let style = TableStyle {
            color: std::io::stdout().is_terminal(),
        };
        Ok(Self::for_root(root, style))
    }
}
