// ABOUTME: External rendering module for the break-slides application
// ABOUTME: Compiles the Beamer deck with pdflatex and the Quarto deck with quarto when available

use crate::errors::{BreakError, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

/// Commands used for the optional final rendering step
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub latex_command: String,
    pub quarto_command: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            latex_command: "pdflatex".to_string(),
            quarto_command: "quarto".to_string(),
        }
    }
}

/// Artifacts produced by the external tools
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub pdf: Option<PathBuf>,
    pub html: Option<PathBuf>,
}

/// Check whether a command can be started
pub fn tool_available(command: &str) -> bool {
    Command::new(command)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn run_tool(tool: &str, command: &mut Command) -> Result<()> {
    let start_time = Instant::now();
    let output = command.output().map_err(|e| BreakError::RenderError {
        tool: tool.to_string(),
        message: format!("failed to start: {}", e),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        // pdflatex reports errors on stdout
        let detail = if stderr.trim().is_empty() {
            stdout.lines().rev().take(5).collect::<Vec<_>>().join(" | ")
        } else {
            stderr.trim().to_string()
        };
        return Err(BreakError::RenderError {
            tool: tool.to_string(),
            message: format!("exited with {}: {}", output.status, detail),
        });
    }

    info!(
        "{} finished in {:.2} seconds",
        tool,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Compile the Beamer deck to PDF next to it. Returns `None` when pdflatex is not installed.
pub fn render_pdf(tex_path: &Path, config: &RenderConfig) -> Result<Option<PathBuf>> {
    if !tex_path.is_file() {
        return Err(BreakError::PathNotFoundError(tex_path.to_path_buf()));
    }
    if !tool_available(&config.latex_command) {
        info!("{} not found, skipping PDF output", config.latex_command);
        return Ok(None);
    }

    let output_dir = tex_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    info!("Compiling {:?} with {}", tex_path, config.latex_command);

    let mut output_dir_arg = std::ffi::OsString::from("-output-directory=");
    output_dir_arg.push(output_dir.as_os_str());
    run_tool(
        &config.latex_command,
        Command::new(&config.latex_command)
            .arg("-interaction=nonstopmode")
            .arg(output_dir_arg)
            .arg(tex_path)
            .stdin(Stdio::null()),
    )?;

    Ok(Some(tex_path.with_extension("pdf")))
}

/// Render the Quarto deck to reveal.js HTML. Returns `None` when quarto is not installed.
pub fn render_revealjs(qmd_path: &Path, config: &RenderConfig) -> Result<Option<PathBuf>> {
    if !qmd_path.is_file() {
        return Err(BreakError::PathNotFoundError(qmd_path.to_path_buf()));
    }
    if !tool_available(&config.quarto_command) {
        info!("{} not found, skipping reveal.js output", config.quarto_command);
        return Ok(None);
    }

    info!("Rendering {:?} with {}", qmd_path, config.quarto_command);
    run_tool(
        &config.quarto_command,
        Command::new(&config.quarto_command)
            .arg("render")
            .arg(qmd_path)
            .arg("--to")
            .arg("revealjs")
            .stdin(Stdio::null()),
    )?;

    Ok(Some(qmd_path.with_extension("html")))
}

/// Run both renderers, logging failures instead of returning them
pub fn render_all(tex_path: &Path, qmd_path: &Path, config: &RenderConfig) -> RenderedArtifacts {
    let pdf = render_pdf(tex_path, config).unwrap_or_else(|e| {
        warn!("PDF rendering failed: {}", e);
        None
    });
    let html = render_revealjs(qmd_path, config).unwrap_or_else(|e| {
        warn!("reveal.js rendering failed: {}", e);
        None
    });
    RenderedArtifacts { pdf, html }
}
