// ABOUTME: Utility functions for the break-slides application
// ABOUTME: Provides path validation and file writing helpers

use crate::errors::{BreakError, Result};
use log::info;
use std::path::{Component, Path};

/// Validate that a directory exists
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BreakError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(BreakError::ValidationError(format!(
            "Path is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Whether `path` has a `/` or `\` in it
pub fn has_path_separator(path: &str) -> bool {
    path.contains('/') || path.contains('\\')
}

/// Name of the folder a path points to, resolving "." and ".." when needed
pub fn folder_name(path: &Path) -> Option<String> {
    match path.components().last() {
        Some(Component::Normal(name)) => Some(name.to_string_lossy().to_string()),
        _ => std::fs::canonicalize(path)
            .ok()?
            .file_name()
            .map(|name| name.to_string_lossy().to_string()),
    }
}

/// Write a UTF-8 text file
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    info!("Writing {:?}", path);
    std::fs::write(path, content).map_err(BreakError::FileReadError)
}
