// ABOUTME: Loading of tab exports for the break-slides application
// ABOUTME: Reads break category CSVs and the judge list, and discovers category files

use crate::errors::{BreakError, Result};
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Files whose name contains this are never treated as a break category
pub const RESERVED_JUDGES_NAME: &str = "judges";
pub const JUDGES_FILE: &str = "judges.csv";

const RANK_PLACEHOLDER: &str = "---------";
const BREAK_PLACEHOLDER: &str = "(different break)";
const CATEGORY_COLUMNS: [&str; 5] = ["Rk", "break", "Pts", "Spk", "team"];

/// One breaking team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakRecord {
    pub position: u32,
    pub team: String,
    pub team_points: i64,
    pub speaker_points: i64,
}

/// A break group such as "Open" or "ESL", with its teams in table order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub records: Vec<BreakRecord>,
}

/// A category file found in the tournament folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySource {
    pub name: String,
    pub path: PathBuf,
}

impl CategorySource {
    pub fn load(&self) -> Result<Category> {
        Ok(Category {
            name: self.name.clone(),
            records: load_category(&self.path)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawBreakRow {
    #[serde(rename = "Rk")]
    rank: Option<String>,
    #[serde(rename = "break")]
    position: Option<String>,
    #[serde(rename = "Pts")]
    team_points: Option<String>,
    #[serde(rename = "Spk")]
    speaker_points: Option<String>,
    team: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawJudgeRow {
    name: Option<String>,
}

/// List the break category files of a folder, sorted by file name
pub fn discover_categories(folder: &Path) -> Result<Vec<CategorySource>> {
    let pattern = format!(
        "{}/*.csv",
        glob::Pattern::escape(&folder.to_string_lossy())
    );

    let entries = glob::glob(&pattern).map_err(|e| {
        BreakError::ValidationError(format!("Invalid glob pattern {}: {}", pattern, e))
    })?;

    let mut sources: Vec<CategorySource> = entries
        .flatten()
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let file_name = path.file_name()?.to_string_lossy().to_string();
            if file_name.contains(RESERVED_JUDGES_NAME) {
                debug!("Skipping reserved file {:?}", path);
                return None;
            }
            let name = path.file_stem()?.to_string_lossy().to_string();
            Some(CategorySource { name, path })
        })
        .collect();

    sources.sort_by(|a, b| a.path.cmp(&b.path));
    info!("Found {} break categories in {:?}", sources.len(), folder);
    Ok(sources)
}

/// Read one break category, dropping placeholder rows
pub fn load_category(path: &Path) -> Result<Vec<BreakRecord>> {
    debug!("Reading break category from {:?}", path);
    let mut reader = open_reader(path)?;
    require_columns(&mut reader, path, &CATEGORY_COLUMNS)?;

    let mut records = Vec::new();
    let mut dropped = 0;
    for (index, row) in reader.deserialize::<RawBreakRow>().enumerate() {
        let row = row.map_err(|e| BreakError::csv(path, e))?;
        // Header is line 1
        let line = index + 2;

        if !matches!(present(&row.rank), Some(rank) if rank != RANK_PLACEHOLDER) {
            dropped += 1;
            continue;
        }
        let position = match present(&row.position) {
            Some(position) if position != BREAK_PLACEHOLDER => position,
            _ => {
                dropped += 1;
                continue;
            }
        };

        let position = parse_integer(position)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| invalid(path, line, "break", position))?;
        let team_points = parse_integer(row.team_points.as_deref().unwrap_or(""))
            .ok_or_else(|| invalid(path, line, "Pts", row.team_points.as_deref().unwrap_or("")))?;
        let speaker_points = parse_integer(row.speaker_points.as_deref().unwrap_or(""))
            .ok_or_else(|| {
                invalid(path, line, "Spk", row.speaker_points.as_deref().unwrap_or(""))
            })?;

        records.push(BreakRecord {
            position,
            team: row.team.unwrap_or_default().trim().to_string(),
            team_points,
            speaker_points,
        });
    }

    debug!(
        "Loaded {} records from {:?}, dropped {} placeholder rows",
        records.len(),
        path,
        dropped
    );
    Ok(records)
}

/// Read the judge names, sorted alphabetically
pub fn load_judges(path: &Path) -> Result<Vec<String>> {
    debug!("Reading judges from {:?}", path);
    let mut reader = open_reader(path)?;
    require_columns(&mut reader, path, &["name"])?;

    let mut judges = Vec::new();
    for row in reader.deserialize::<RawJudgeRow>() {
        let row = row.map_err(|e| BreakError::csv(path, e))?;
        if let Some(name) = present(&row.name) {
            judges.push(name.to_string());
        }
    }
    judges.sort();
    Ok(judges)
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| BreakError::csv(path, e))
}

fn require_columns(
    reader: &mut csv::Reader<std::fs::File>,
    path: &Path,
    columns: &[&str],
) -> Result<()> {
    let headers = reader.headers().map_err(|e| BreakError::csv(path, e))?;
    for column in columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(BreakError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a whole number, accepting integral floats such as "300.0"
pub(crate) fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }
    let float = value.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

fn invalid(path: &Path, row: usize, column: &str, value: &str) -> BreakError {
    BreakError::InvalidRecord {
        path: path.to_path_buf(),
        row,
        message: format!("'{}' is not a whole number in column {}", value, column),
    }
}
