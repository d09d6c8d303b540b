// ABOUTME: Table-of-contents extractor for the deckdown crate
// ABOUTME: Scans the normalized document for headings independent of slide segmentation

use crate::model::TocItem;
use crate::parser::normalize_line_endings;
use crate::segment::HEADING_LINE_RE;

/// Extract the flat heading list from a raw document.
///
/// Runs as a single pass over the normalized text, independent of the slide
/// segmenter. The scan tracks the same triple-backtick fence toggle, so a
/// line that looks like a heading inside a code block never becomes an
/// entry. There is no inline-code guard here.
pub fn parse_toc(text: &str) -> Vec<TocItem> {
    let normalized = normalize_line_endings(text);
    let mut items = Vec::new();
    let mut in_code_fence = false;

    for (idx, line) in normalized.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            in_code_fence = !in_code_fence;
            continue;
        }
        if in_code_fence {
            continue;
        }

        if let Some(caps) = HEADING_LINE_RE.captures(trimmed) {
            items.push(TocItem {
                id: format!("toc-{}", idx),
                text: format!("{}{}", &caps[1], &caps[3]),
                level: caps[2].len() as u8,
                line_index: idx,
            });
        }
    }

    items
}
