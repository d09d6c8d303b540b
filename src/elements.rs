// ABOUTME: Block classifier and element builder for the deckdown crate
// ABOUTME: Converts one slide block into an ordered list of typed slide elements

use crate::animate::parse_animate;
use crate::inline::format_inline;
use crate::model::{ElementContent, ElementType, ListType, SlideContent, SlideElement};
use crate::segment::HEADING_LINE_RE;
use log::warn;
use regex::Regex;
use std::sync::LazyLock;

static LAYOUT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^layout:\s*([a-z-]+)").unwrap());

static NOTES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^###\s+notes:?\s*$").unwrap());

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.*)$").unwrap());

static MEDIA_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!(icon|image|video|audio)\(").unwrap());
static MEDIA_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!(icon|image|video|audio)\((.+)\)$").unwrap());

/// Font size in px for subtitle elements at deep heading levels.
/// Level 3 starts at 24 and each further level loses 2, floored at 18.
fn subtitle_font_size(level: u8) -> u8 {
    let steps = level.saturating_sub(3);
    24u8.saturating_sub(2 * steps).max(18)
}

/// Classify one slide block into a slide, or nothing when the block yields
/// no elements.
///
/// A single cursor walks the block's lines; multi-line constructs (fenced
/// code, blockquotes, tables, `!html(...)`, `$$...$$`) advance it past
/// everything they consume. Recognition order per non-blank line: layout
/// directive, notes marker, heading, list item, fenced code, blockquote,
/// table, micro-syntax tokens, then a generic inline-formatted markdown
/// element.
pub fn build_slide(lines: &[String], slide_idx: usize) -> Option<SlideContent> {
    let mut elements: Vec<SlideElement> = Vec::new();
    let mut notes = String::new();
    let mut in_notes = false;
    let mut layout = String::from("auto");
    let mut clicks: u32 = 0;
    let mut cursor = 0;

    while cursor < lines.len() {
        let raw = &lines[cursor];
        let trimmed = raw.trim();

        if in_notes {
            notes.push_str(raw);
            notes.push('\n');
            cursor += 1;
            continue;
        }

        if trimmed.is_empty() {
            cursor += 1;
            continue;
        }

        // Layout directive sets block state and emits nothing
        if let Some(caps) = LAYOUT_RE.captures(trimmed) {
            layout = caps[1].to_string();
            cursor += 1;
            continue;
        }

        // Notes marker flips the rest of the block into the notes accumulator.
        // Checked before headings: the marker itself looks like a level-3 heading.
        if NOTES_RE.is_match(trimmed) {
            in_notes = true;
            cursor += 1;
            continue;
        }

        let start = cursor;

        if let Some(caps) = HEADING_LINE_RE.captures(trimmed) {
            let level = caps[2].len() as u8;
            let text = format!("{}{}", &caps[1], &caps[3]);
            let content = ElementContent::Text(format_inline(&text));
            let mut element = if level == 1 {
                SlideElement::new(slide_idx, start, ElementType::Title, content, 0)
            } else {
                clicks += 1;
                let mut e =
                    SlideElement::new(slide_idx, start, ElementType::Subtitle, content, clicks);
                if level >= 3 {
                    e.style = Some(format!("font-size: {}px", subtitle_font_size(level)));
                }
                e
            };
            element.animate = parse_animate(raw);
            elements.push(element);
            cursor += 1;
            continue;
        }

        // Each list line is its own element; lists are not grouped
        if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
            clicks += 1;
            let item = format_inline(&trimmed[2..]);
            let mut element = SlideElement::new(
                slide_idx,
                start,
                ElementType::Bullets,
                ElementContent::List(vec![item]),
                clicks,
            );
            element.list_type = Some(ListType::Unordered);
            element.animate = parse_animate(raw);
            elements.push(element);
            cursor += 1;
            continue;
        }

        if let Some(caps) = ORDERED_ITEM_RE.captures(trimmed) {
            clicks += 1;
            let item = format_inline(&caps[2]);
            let mut element = SlideElement::new(
                slide_idx,
                start,
                ElementType::Bullets,
                ElementContent::List(vec![item]),
                clicks,
            );
            element.list_type = Some(ListType::Ordered);
            element.list_start = caps[1].parse().ok();
            element.animate = parse_animate(raw);
            elements.push(element);
            cursor += 1;
            continue;
        }

        if trimmed.starts_with("```") {
            let tag = trimmed[3..].trim();
            let language = if tag.is_empty() {
                None
            } else {
                Some(tag.to_string())
            };
            let mut body: Vec<&str> = Vec::new();
            cursor += 1;
            while cursor < lines.len() && !lines[cursor].trim().starts_with("```") {
                body.push(&lines[cursor]);
                cursor += 1;
            }
            if cursor < lines.len() {
                cursor += 1; // past the closing fence
            }
            clicks += 1;
            let mut element = SlideElement::new(
                slide_idx,
                start,
                ElementType::Code,
                ElementContent::Text(body.join("\n").trim().to_string()),
                clicks,
            );
            element.language = language;
            element.animate = parse_animate(&lines[start]);
            elements.push(element);
            continue;
        }

        if trimmed.starts_with("> ") {
            let mut quoted: Vec<&str> = Vec::new();
            while cursor < lines.len() {
                match lines[cursor].trim().strip_prefix("> ") {
                    Some(rest) => {
                        quoted.push(rest);
                        cursor += 1;
                    }
                    None => break,
                }
            }
            clicks += 1;
            let mut element = SlideElement::new(
                slide_idx,
                start,
                ElementType::Quote,
                ElementContent::Text(quoted.join("\n")),
                clicks,
            );
            element.animate = parse_animate(&lines[start]);
            elements.push(element);
            continue;
        }

        if trimmed.starts_with('|') {
            let mut consumed: Vec<&str> = Vec::new();
            while cursor < lines.len() {
                let t = lines[cursor].trim();
                if t.starts_with('|') || t.starts_with("+-") {
                    consumed.push(t);
                    cursor += 1;
                } else {
                    break;
                }
            }
            if consumed.len() >= 3 {
                clicks += 1;
                let mut element = SlideElement::new(
                    slide_idx,
                    start,
                    ElementType::Table,
                    ElementContent::Text(consumed.join("\n")),
                    clicks,
                );
                element.animate = parse_animate(&lines[start]);
                elements.push(element);
            } else {
                // Too short for a table: only the first line falls back to
                // markdown; later pipe lines re-enter the loop on their own
                cursor = start + 1;
                clicks += 1;
                let mut element = SlideElement::new(
                    slide_idx,
                    start,
                    ElementType::Markdown,
                    ElementContent::Text(format_inline(trimmed)),
                    clicks,
                );
                element.animate = parse_animate(raw);
                elements.push(element);
            }
            continue;
        }

        if MEDIA_PREFIX_RE.is_match(trimmed) {
            // A media token whose argument never closes emits nothing at all
            if let Some(caps) = MEDIA_TOKEN_RE.captures(trimmed) {
                let element_type = match &caps[1] {
                    "icon" => ElementType::Icon,
                    "image" => ElementType::Image,
                    "video" => ElementType::Video,
                    _ => ElementType::Audio,
                };
                clicks += 1;
                let mut element = SlideElement::new(
                    slide_idx,
                    start,
                    element_type,
                    ElementContent::Text(caps[2].to_string()),
                    clicks,
                );
                element.animate = parse_animate(raw);
                elements.push(element);
            } else {
                warn!("Dropping media token with unclosed argument: {}", trimmed);
            }
            cursor += 1;
            continue;
        }

        if trimmed == "!grid" || trimmed == "!vector" {
            let element_type = if trimmed == "!grid" {
                ElementType::Grid
            } else {
                ElementType::Vector
            };
            clicks += 1;
            let mut element = SlideElement::new(
                slide_idx,
                start,
                element_type,
                ElementContent::Text(String::new()),
                clicks,
            );
            element.animate = parse_animate(raw);
            elements.push(element);
            cursor += 1;
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("!html(") {
            let mut parts: Vec<String> = Vec::new();
            let mut chunk = rest.to_string();
            loop {
                let right_trimmed = chunk.trim_end();
                if right_trimmed.ends_with(')') {
                    parts.push(right_trimmed[..right_trimmed.len() - 1].to_string());
                    cursor += 1;
                    break;
                }
                parts.push(chunk);
                cursor += 1;
                if cursor >= lines.len() {
                    break;
                }
                chunk = lines[cursor].clone();
            }
            clicks += 1;
            let mut element = SlideElement::new(
                slide_idx,
                start,
                ElementType::Html,
                ElementContent::Text(parts.join("\n")),
                clicks,
            );
            element.animate = parse_animate(&lines[start]);
            elements.push(element);
            continue;
        }

        if let Some(after) = trimmed.strip_prefix("$$") {
            let latex = if let Some(end) = after.find("$$") {
                cursor += 1;
                after[..end].trim().to_string()
            } else {
                let mut parts: Vec<String> = vec![after.to_string()];
                cursor += 1;
                while cursor < lines.len() {
                    let line = &lines[cursor];
                    if let Some(end) = line.find("$$") {
                        parts.push(line[..end].to_string());
                        cursor += 1;
                        break;
                    }
                    parts.push(line.clone());
                    cursor += 1;
                }
                parts.join("\n").trim().to_string()
            };
            clicks += 1;
            let mut element = SlideElement::new(
                slide_idx,
                start,
                ElementType::Math,
                ElementContent::Math {
                    latex,
                    display_mode: true,
                },
                clicks,
            );
            element.animate = parse_animate(&lines[start]);
            elements.push(element);
            continue;
        }

        // Default: generic inline-formatted markdown line
        clicks += 1;
        let mut element = SlideElement::new(
            slide_idx,
            start,
            ElementType::Markdown,
            ElementContent::Text(format_inline(trimmed)),
            clicks,
        );
        element.animate = parse_animate(raw);
        elements.push(element);
        cursor += 1;
    }

    if elements.is_empty() {
        return None;
    }

    Some(SlideContent {
        id: format!("s{}", slide_idx),
        elements,
        notes: notes.trim().to_string(),
        layout,
    })
}
