// ABOUTME: Pipeline for the break-slides application
// ABOUTME: Resolves the tournament folder, loads the tab exports, writes both decks and renders them

use crate::config::Config;
use crate::deck::{render_decks, BreakData, RenderedDecks};
use crate::errors::Result;
use crate::format::{Beamer, DeckMeta, Quarto, SlideFormat};
use crate::render::{render_all, RenderedArtifacts};
use crate::tabbycat::{discover_categories, load_judges, JUDGES_FILE};
use crate::utils;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

pub const BACKGROUND_FILE: &str = "background.png";

/// The folder to read from and write to, and the name shown on the slides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub folder: PathBuf,
    pub tournament: String,
}

/// Where the decks were written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckPaths {
    pub latex: PathBuf,
    pub quarto: PathBuf,
}

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub target: Target,
    pub decks: DeckPaths,
    pub artifacts: RenderedArtifacts,
    pub judges: usize,
    pub categories: usize,
    pub teams: usize,
}

/// Work out the folder and tournament name from the command line arguments.
///
/// A folder without any path separator doubles as the tournament name. A
/// folder that does not exist is replaced by the configured test data.
pub fn resolve_target(
    folder: Option<&str>,
    tournament: Option<&str>,
    config: &Config,
) -> Result<Target> {
    let mut tournament = tournament
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    let folder = folder.map(str::trim).unwrap_or_default();
    let mut path = PathBuf::from(folder);
    if !folder.is_empty() && !utils::has_path_separator(folder) {
        if tournament.is_none() {
            tournament = Some(folder.to_string());
        }
        path = Path::new(".").join(folder);
    }

    if folder.is_empty() || !path.is_dir() {
        warn!(
            "{:?} is not a folder. Operating with test files from {:?}.",
            path, config.fallback_folder
        );
        utils::validate_directory_exists(&config.fallback_folder)?;
        return Ok(Target {
            folder: config.fallback_folder.clone(),
            tournament: config.fallback_tournament.clone(),
        });
    }

    let tournament = match tournament {
        Some(name) => name,
        None => {
            utils::folder_name(&path).unwrap_or_else(|| config.fallback_tournament.clone())
        }
    };

    Ok(Target {
        folder: path,
        tournament,
    })
}

/// Read everything the decks need from the tournament folder
pub fn load_break_data(target: &Target) -> Result<BreakData> {
    utils::validate_directory_exists(&target.folder)?;

    let background_path = target.folder.join(BACKGROUND_FILE);
    let background = if background_path.is_file() {
        debug!("Using background image {:?}", background_path);
        Some(background_path)
    } else {
        debug!("No {} in {:?}", BACKGROUND_FILE, target.folder);
        None
    };

    let judges_path = target.folder.join(JUDGES_FILE);
    let judges = if judges_path.is_file() {
        load_judges(&judges_path)?
    } else {
        info!("No {} in {:?}, skipping the judge break", JUDGES_FILE, target.folder);
        Vec::new()
    };

    let categories = discover_categories(&target.folder)?
        .iter()
        .map(|source| source.load())
        .collect::<Result<Vec<_>>>()?;

    Ok(BreakData {
        meta: DeckMeta {
            tournament: target.tournament.clone(),
            background,
        },
        judges,
        categories,
    })
}

/// Write both decks into `folder`
pub fn write_decks(folder: &Path, decks: &RenderedDecks) -> Result<DeckPaths> {
    let paths = DeckPaths {
        latex: folder.join(Beamer.file_name()),
        quarto: folder.join(Quarto.file_name()),
    };
    utils::write_text_file(&paths.latex, &decks.latex)?;
    utils::write_text_file(&paths.quarto, &decks.quarto)?;
    Ok(paths)
}

/// Run the whole pipeline for one tournament folder
pub fn generate_break_slides(target: &Target, config: &Config) -> Result<GenerationReport> {
    config.validate()?;
    info!(
        "Generating break slides for {:?} from {:?}",
        target.tournament, target.folder
    );

    let data = load_break_data(target)?;
    if data.judges.is_empty() && data.categories.is_empty() {
        warn!("No judges or break categories found in {:?}", target.folder);
    }

    let decks = render_decks(&data, config)?;
    let paths = write_decks(&target.folder, &decks)?;

    let artifacts = if config.run_renderers {
        render_all(&paths.latex, &paths.quarto, &config.render_config())
    } else {
        debug!("Skipping external renderers");
        RenderedArtifacts::default()
    };

    Ok(GenerationReport {
        target: target.clone(),
        decks: paths,
        artifacts,
        judges: data.judges.len(),
        categories: data.categories.len(),
        teams: data.categories.iter().map(|c| c.records.len()).sum(),
    })
}
