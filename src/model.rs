// ABOUTME: Data model for the deckdown crate
// ABOUTME: Defines slide, element, animation, and table-of-contents value types

use serde::{Deserialize, Serialize};

/// A single parsed slide: an ordered list of elements plus speaker notes
/// and a layout hint for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideContent {
    pub id: String,
    pub elements: Vec<SlideElement>,
    pub notes: String,
    pub layout: String,
}

/// The closed set of element kinds a slide can contain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Title,
    Subtitle,
    Bullets,
    Code,
    Quote,
    Table,
    Icon,
    Grid,
    Vector,
    Image,
    Video,
    Audio,
    Html,
    Math,
    Markdown,
}

/// Element payload. Most elements carry plain text; bullets carry a list
/// and math carries LaTeX with a display-mode flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ElementContent {
    Text(String),
    List(Vec<String>),
    Math {
        latex: String,
        #[serde(rename = "displayMode")]
        display_mode: bool,
    },
}

/// List flavor for bullet elements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    Unordered,
}

/// Animation kinds accepted by the auto-animate directive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnimateKind {
    Move,
    Scale,
    Fade,
    Opacity,
    Transform,
    All,
}

impl AnimateKind {
    /// Parse a directive keyword, returning None for anything outside the
    /// closed set.
    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "move" => Some(Self::Move),
            "scale" => Some(Self::Scale),
            "fade" => Some(Self::Fade),
            "opacity" => Some(Self::Opacity),
            "transform" => Some(Self::Transform),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Optional per-element animation directives parsed from HTML comments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutoAnimate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_animate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_animate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_animate_type: Option<AnimateKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_animate_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_animate_easing: Option<String>,
}

/// One typed, orderable piece of slide content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlideElement {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub content: ElementContent,
    /// Progressive-reveal ordering; the title element is fixed at 0
    pub click_state: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_type: Option<ListType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub animate: Option<AutoAnimate>,
}

impl SlideElement {
    /// Build an element with a deterministic id derived from the slide index
    /// and the element's originating line index within its block.
    pub fn new(
        slide_idx: usize,
        line_idx: usize,
        element_type: ElementType,
        content: ElementContent,
        click_state: u32,
    ) -> Self {
        Self {
            id: format!("s{}-e{}", slide_idx, line_idx),
            element_type,
            content,
            click_state,
            style: None,
            list_type: None,
            list_start: None,
            language: None,
            animate: None,
        }
    }
}

/// A heading entry from the independent table-of-contents scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TocItem {
    pub id: String,
    pub text: String,
    pub level: u8,
    pub line_index: usize,
}
