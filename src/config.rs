// ABOUTME: Configuration module for the break-slides application
// ABOUTME: Provides layout settings, fallback data location and environment variable handling

use crate::errors::{BreakError, Result};
use crate::render::RenderConfig;
use log::warn;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_COLUMN_MAX: usize = 5;
pub const DEFAULT_FALLBACK_FOLDER: &str = "test tournament";
pub const DEFAULT_FALLBACK_TOURNAMENT: &str = "Default IV";

/// Settings shared by the layout engine, the renderers and the pipeline
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of judge names per column
    pub column_max: usize,
    /// Insert a blank safety slide before every reveal section
    pub with_safety: bool,
    /// Folder used when the requested one does not exist
    pub fallback_folder: PathBuf,
    pub fallback_tournament: String,
    /// Run pdflatex and quarto after writing the decks
    pub run_renderers: bool,
    pub latex_command: String,
    pub quarto_command: String,
}

impl Default for Config {
    fn default() -> Self {
        let render = RenderConfig::default();
        Self {
            column_max: DEFAULT_COLUMN_MAX,
            with_safety: false,
            fallback_folder: PathBuf::from(DEFAULT_FALLBACK_FOLDER),
            fallback_tournament: DEFAULT_FALLBACK_TOURNAMENT.to_string(),
            run_renderers: true,
            latex_command: render.latex_command,
            quarto_command: render.quarto_command,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let column_max = column_max_from(env::var("BREAK_COLUMN_MAX").ok(), defaults.column_max);
        let with_safety = env::var("BREAK_WITH_SAFETY")
            .ok()
            .map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.with_safety);
        let fallback_folder = env::var("BREAK_FALLBACK_FOLDER")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.fallback_folder);
        let latex_command = env::var("PDFLATEX_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.latex_command);
        let quarto_command = env::var("QUARTO_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.quarto_command);

        Self {
            column_max,
            with_safety,
            fallback_folder,
            fallback_tournament: defaults.fallback_tournament,
            run_renderers: defaults.run_renderers,
            latex_command,
            quarto_command,
        }
    }

    /// Reject settings the layout engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.column_max == 0 {
            return Err(BreakError::ConfigError(
                "column_max must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get a render configuration from this config
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            latex_command: self.latex_command.clone(),
            quarto_command: self.quarto_command.clone(),
        }
    }
}

/// Parse a `BREAK_COLUMN_MAX` value, keeping `default` when it is absent or not a number
pub(crate) fn column_max_from(value: Option<String>, default: usize) -> usize {
    match value {
        None => default,
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(column_max) => column_max,
            Err(_) => {
                warn!(
                    "BREAK_COLUMN_MAX={:?} is not a whole number, using {}",
                    raw, default
                );
                default
            }
        },
    }
}
