// ABOUTME: Auto-animate metadata parser for the deckdown crate
// ABOUTME: Extracts animation directives from HTML comments on a raw source line

use crate::model::{AnimateKind, AutoAnimate};
use regex::Regex;
use std::sync::LazyLock;

static ANIMATE_DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--\s*auto-animate:\s*(.*?)\s*-->").unwrap());

static DATA_ID_DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--\s*data-id:\s*(.*?)\s*-->").unwrap());

/// Parse auto-animate metadata from a raw (unsplit) source line.
///
/// Recognizes `<!-- auto-animate: params -->` and `<!-- data-id: value -->`.
/// Returns `None` when neither directive is present, which is distinct from
/// a present-but-empty directive. Invalid `type` keywords and unparseable
/// durations are dropped silently.
pub fn parse_animate(line: &str) -> Option<AutoAnimate> {
    let params = ANIMATE_DIRECTIVE_RE.captures(line);
    let data_id = DATA_ID_DIRECTIVE_RE.captures(line);

    if params.is_none() && data_id.is_none() {
        return None;
    }

    let mut meta = AutoAnimate::default();

    if let Some(caps) = params {
        for token in caps[1].split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match token {
                "true" | "enable" => meta.auto_animate = Some(true),
                "false" | "disable" => meta.auto_animate = Some(false),
                _ => {
                    if let Some((key, value)) = token.split_once('=') {
                        let value = value.trim();
                        match key.trim() {
                            "id" => meta.auto_animate_id = Some(value.to_string()),
                            "type" => meta.auto_animate_type = AnimateKind::from_keyword(value),
                            "duration" => meta.auto_animate_duration = value.parse().ok(),
                            "easing" => meta.auto_animate_easing = Some(value.to_string()),
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    // data-id overrides any id set through the params block
    if let Some(caps) = data_id {
        meta.auto_animate_id = Some(caps[1].to_string());
    }

    Some(meta)
}
