// ABOUTME: Deck assembly for the break-slides application
// ABOUTME: Lays out the judge break and the team breaks once and spells them in each format

use crate::config::Config;
use crate::errors::Result;
use crate::format::{Beamer, DeckMeta, Quarto, SlideFormat};
use crate::layout::layout_entries;
use crate::tabbycat::Category;
use log::debug;

pub const JUDGE_BREAK_TITLE: &str = "Judge break";

/// Everything a deck is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakData {
    pub meta: DeckMeta,
    /// Judge names, already sorted
    pub judges: Vec<String>,
    pub categories: Vec<Category>,
}

/// Both encodings of the same deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDecks {
    pub latex: String,
    pub quarto: String,
}

/// Rank label used on the announcement slides: 1st, 2nd, 3rd, then `{n}th`
pub fn ordinal(position: u32) -> String {
    match position {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{}th", n),
    }
}

/// The judge break section, or nothing when there are no judges
pub fn judge_break(format: &dyn SlideFormat, judges: &[String], config: &Config) -> Result<String> {
    if judges.is_empty() {
        return Ok(String::new());
    }

    let slides = layout_entries(judges.len(), config.column_max)?;
    debug!(
        "Judge break: {} names on {} {} slides",
        judges.len(),
        slides.len(),
        format.name()
    );

    let mut out = String::new();
    if config.with_safety {
        out.push_str(&format.safety_slide("Safety slide judge break"));
    }
    out.push_str(&format.section(JUDGE_BREAK_TITLE));

    for slide in &slides {
        let columns: String = slide
            .columns
            .iter()
            .map(|range| {
                let items: String = judges[range.clone()]
                    .iter()
                    .map(|judge| format.item(judge))
                    .collect();
                format.column(&format.list(&items))
            })
            .collect();
        out.push_str(&format.slide(JUDGE_BREAK_TITLE, slide.counter(), &columns));
    }
    Ok(out)
}

/// One section per category: a title slide, then one slide per breaking team
pub fn category_slides(format: &dyn SlideFormat, category: &Category, config: &Config) -> String {
    let mut out = String::new();
    if config.with_safety {
        out.push_str(&format.safety_slide("Safety slide"));
    }
    out.push_str(&format.section(&category.name));

    for record in &category.records {
        out.push_str(&format.record_slide(&category.name, &ordinal(record.position), record));
    }
    out
}

/// A complete deck in one format
pub fn render_deck(format: &dyn SlideFormat, data: &BreakData, config: &Config) -> Result<String> {
    let mut doc = format.preamble(&data.meta);
    doc.push_str(&judge_break(format, &data.judges, config)?);
    for category in &data.categories {
        doc.push_str(&category_slides(format, category, config));
    }
    doc.push_str(&format.closing());
    Ok(doc)
}

/// The Beamer and Quarto decks for the same data
pub fn render_decks(data: &BreakData, config: &Config) -> Result<RenderedDecks> {
    config.validate()?;
    Ok(RenderedDecks {
        latex: render_deck(&Beamer, data, config)?,
        quarto: render_deck(&Quarto, data, config)?,
    })
}
