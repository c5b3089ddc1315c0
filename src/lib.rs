// ABOUTME: Library module for the break-slides program.
// ABOUTME: Contains the layout engine, output formats and the CSV-to-deck pipeline.

// Reexport modules
pub mod config;
pub mod deck;
pub mod errors;
pub mod format;
pub mod generate;
pub mod layout;
pub mod render;
pub mod tabbycat;
pub mod utils;

// Reexport common types and functions
pub use config::Config;
pub use deck::{
    category_slides, judge_break, ordinal, render_deck, render_decks, BreakData, RenderedDecks,
};
pub use errors::{BreakError, Result};
pub use format::{Beamer, DeckMeta, Quarto, SlideFormat};
pub use generate::{generate_break_slides, resolve_target, GenerationReport, Target};
pub use layout::{column_lengths, layout_entries, paginate, SlideLayout};
pub use render::{RenderConfig, RenderedArtifacts};
pub use tabbycat::{BreakRecord, Category};
