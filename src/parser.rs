// ABOUTME: Top-level parsing entry points for the deckdown crate
// ABOUTME: Orchestrates normalization, segmentation, and classification into slides

use crate::config::ParserOptions;
use crate::elements::build_slide;
use crate::errors::{DeckError, Result};
use crate::model::SlideContent;
use crate::segment::split_blocks;
use crate::utils::{ensure_parent_directory_exists, validate_file_exists};
use log::info;
use std::fs;
use std::path::Path;

/// Normalize line endings by replacing CRLF with LF.
/// Tabs, trailing whitespace, and any BOM are left untouched.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Parse a markdown document into an ordered list of slides.
///
/// Pure function of the text and options: all state lives inside the call,
/// results are deterministic, and independent invocations are safe to run
/// concurrently. Blocks whose classification yields no elements produce no
/// slide.
pub fn parse_slides(text: &str, options: &ParserOptions) -> Vec<SlideContent> {
    let normalized = normalize_line_endings(text);
    let blocks = split_blocks(&normalized, options);

    let mut slides = Vec::with_capacity(blocks.len());
    for block in &blocks {
        if let Some(slide) = build_slide(block, slides.len()) {
            slides.push(slide);
        }
    }
    slides
}

/// Read a markdown file and parse it into slides
pub fn parse_markdown_file(path: &Path, options: &ParserOptions) -> Result<Vec<SlideContent>> {
    info!("Parsing markdown file: {:?}", path);

    validate_file_exists(path)?;
    let text = fs::read_to_string(path).map_err(DeckError::FileReadError)?;

    Ok(parse_slides(&text, options))
}

/// Serialize slides as pretty JSON and write them to a file
pub fn write_slides_json(slides: &[SlideContent], output_path: &Path) -> Result<()> {
    info!("Writing slides JSON to file: {:?}", output_path);

    ensure_parent_directory_exists(output_path)?;
    let json = serde_json::to_string_pretty(slides).map_err(DeckError::SerializationError)?;
    fs::write(output_path, json).map_err(DeckError::FileReadError)?;

    Ok(())
}
