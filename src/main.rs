// ABOUTME: Main entry point for the break-slides program.
// ABOUTME: Provides CLI interface and runs the break slide pipeline from the library.

use anyhow::Context;
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder holding the tab CSV exports (asked interactively when omitted)
    folder: Option<String>,

    /// Tournament name shown on the slides (defaults to the folder name)
    tournament: Option<String>,

    /// Maximum number of judge names per column
    #[arg(long)]
    column_max: Option<usize>,

    /// Insert a safety slide before each reveal section
    #[arg(long)]
    safety: bool,

    /// Only write the .tex and .qmd files, do not run pdflatex or quarto
    #[arg(long)]
    skip_render: bool,
}

fn prompt_folder() -> anyhow::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Tournament folder")
        .interact_text()
        .context("Failed to read the tournament folder")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = breakslides::Config::from_env();
    if let Some(column_max) = cli.column_max {
        config.column_max = column_max;
    }
    if cli.safety {
        config.with_safety = true;
    }
    if cli.skip_render {
        config.run_renderers = false;
    }
    config.validate()?;

    let folder = match cli.folder {
        Some(folder) => folder,
        None => prompt_folder()?,
    };

    let target =
        breakslides::resolve_target(Some(&folder), cli.tournament.as_deref(), &config)?;
    let report = breakslides::generate_break_slides(&target, &config)
        .with_context(|| format!("Failed to generate slides in {:?}", target.folder))?;

    println!(
        "Break slides for {} written: {} judges, {} categories, {} teams",
        report.target.tournament, report.judges, report.categories, report.teams
    );
    println!("  {}", report.decks.latex.display());
    println!("  {}", report.decks.quarto.display());
    for artifact in [&report.artifacts.pdf, &report.artifacts.html]
        .into_iter()
        .flatten()
    {
        println!("  {}", artifact.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
