// ABOUTME: Inline formatter for the deckdown crate
// ABOUTME: Applies ordered markdown-to-HTML substitutions for emphasis, links, and tokens

use regex::Regex;
use std::sync::LazyLock;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static INLINE_MATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([^$]+)\$").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

static STRIKETHROUGH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static UNCHECKED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[ \] ").unwrap());

static CHECKED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[x\] ").unwrap());

/// Apply inline markdown formatting to a single line of text.
///
/// Substitutions run in a fixed order so that later patterns never re-match
/// the output of earlier ones (images before links, bold before italic).
/// The emitted tag vocabulary is a contract with export consumers:
/// `<strong>`, `<em>`, `<del>`, `<code>`, `<a>`, `<img>`,
/// `<input type="checkbox">`, and `<span class="math-inline">`.
pub fn format_inline(text: &str) -> String {
    let formatted = IMAGE_RE.replace_all(text, r#"<img src="$2" alt="$1">"#);
    let formatted =
        INLINE_MATH_RE.replace_all(&formatted, r#"<span class="math-inline">$1</span>"#);
    let formatted = BOLD_RE.replace_all(&formatted, "<strong>$1</strong>");
    let formatted = ITALIC_RE.replace_all(&formatted, "<em>$1</em>");
    let formatted = STRIKETHROUGH_RE.replace_all(&formatted, "<del>$1</del>");
    let formatted = INLINE_CODE_RE.replace_all(&formatted, "<code>$1</code>");
    let formatted = LINK_RE.replace_all(&formatted, r#"<a href="$2">$1</a>"#);
    let formatted = UNCHECKED_RE.replace_all(&formatted, r#"<input type="checkbox" disabled> "#);
    let formatted = CHECKED_RE.replace_all(&formatted, r#"<input type="checkbox" checked disabled> "#);
    formatted.into_owned()
}
