// ABOUTME: Slide segmenter for the deckdown crate
// ABOUTME: Splits a normalized document into slide blocks at delimiters and heading breaks

use crate::config::ParserOptions;
use regex::Regex;
use std::sync::LazyLock;

/// Matches the start of a heading break candidate. The optional non-`#`
/// prefix allows a leading emoji or similar before the hashes.
static HEADING_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^#]*?)(#{1,6})\s+").unwrap());

/// Matches a full heading line, capturing prefix, hash run, and text.
pub(crate) static HEADING_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^#]*?)(#{1,6})\s+(.+)$").unwrap());

static DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^---\s*$").unwrap());

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]*`").unwrap());

/// Whether the matched heading substring sits inside a backtick-delimited
/// inline-code span on the same line. Textual containment only; a line with
/// several similar spans can misfire, and that behavior is kept.
fn heading_inside_code_span(line: &str, heading_match: &str) -> bool {
    CODE_SPAN_RE
        .find_iter(line)
        .any(|span| span.as_str().contains(heading_match))
}

/// Split a normalized document into ordered slide blocks.
///
/// A single fence flag spans the whole scan: triple-backtick lines toggle it
/// and are appended verbatim, and nothing inside a fence ever starts a new
/// block. Outside a fence, a `---` delimiter line always flushes, while a
/// heading at or above the configured level flushes only when the current
/// block already holds non-blank content, so consecutive headings collapse
/// into one block.
pub fn split_blocks(text: &str, options: &ParserOptions) -> Vec<Vec<String>> {
    let mut blocks: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut in_code_fence = false;
    // Non-blank, non-heading content in the current block. Heading lines do
    // not count, so a run of consecutive headings stays in one block.
    let mut block_has_content = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            in_code_fence = !in_code_fence;
            current.push(line.to_string());
            block_has_content = true;
            continue;
        }
        if in_code_fence {
            current.push(line.to_string());
            block_has_content = true;
            continue;
        }

        if options.use_delimiter && DELIMITER_RE.is_match(trimmed) {
            flush_block(&mut blocks, &mut current);
            block_has_content = false;
            continue;
        }

        if options.use_heading_pagination {
            if let Some(caps) = HEADING_BREAK_RE.captures(trimmed) {
                let level = caps[2].len() as u8;
                let matched = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                if level >= options.min_heading_level
                    && !heading_inside_code_span(trimmed, matched)
                {
                    if block_has_content {
                        flush_block(&mut blocks, &mut current);
                        block_has_content = false;
                    }
                    current.push(line.to_string());
                    continue;
                }
            }
        }

        if !trimmed.is_empty() {
            block_has_content = true;
        }
        current.push(line.to_string());
    }

    flush_block(&mut blocks, &mut current);
    blocks
}

/// Emit the current block if it has any non-blank content; drop it otherwise.
fn flush_block(blocks: &mut Vec<Vec<String>>, current: &mut Vec<String>) {
    if current.iter().any(|l| !l.trim().is_empty()) {
        blocks.push(std::mem::take(current));
    } else {
        current.clear();
    }
}
