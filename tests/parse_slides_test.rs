use deckdown::{parse_slides, ElementContent, ElementType, ParserOptions};

const DECK: &str = "\
# Welcome <!-- auto-animate: true -->
A **bold** start
- first point
- second point

---

## Features
layout: two-column
| name | speed |
|------|-------|
| fast | yes   |

```rust
fn demo() -> bool { true }
```

---

# Math & Media
$$
\\int_0^1 x dx
$$
!image(https://example.com/pic.png)
> Quoted wisdom
";

#[test]
fn test_full_deck_structure() {
    let slides = parse_slides(DECK, &ParserOptions::default());
    assert_eq!(slides.len(), 3);

    let ids: Vec<&str> = slides.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s0", "s1", "s2"]);

    // Slide 0: title with animation metadata, markdown, two bullets
    let first = &slides[0];
    assert_eq!(first.elements.len(), 4);
    assert_eq!(first.elements[0].element_type, ElementType::Title);
    assert_eq!(first.elements[0].click_state, 0);
    let animate = first.elements[0].animate.as_ref().unwrap();
    assert_eq!(animate.auto_animate, Some(true));
    assert_eq!(first.elements[1].element_type, ElementType::Markdown);
    assert_eq!(
        first.elements[1].content,
        ElementContent::Text("A <strong>bold</strong> start".to_string())
    );
    assert_eq!(first.elements[2].element_type, ElementType::Bullets);
    assert_eq!(first.elements[3].element_type, ElementType::Bullets);

    // Slide 1: layout directive, subtitle, table, fenced code
    let second = &slides[1];
    assert_eq!(second.layout, "two-column");
    assert_eq!(second.elements.len(), 3);
    assert_eq!(second.elements[0].element_type, ElementType::Subtitle);
    assert_eq!(second.elements[1].element_type, ElementType::Table);
    let code = &second.elements[2];
    assert_eq!(code.element_type, ElementType::Code);
    assert_eq!(code.language.as_deref(), Some("rust"));
    assert_eq!(
        code.content,
        ElementContent::Text("fn demo() -> bool { true }".to_string())
    );

    // Slide 2: title, block math, image token, quote
    let third = &slides[2];
    assert_eq!(third.layout, "auto");
    assert_eq!(third.elements[0].element_type, ElementType::Title);
    assert_eq!(third.elements[1].element_type, ElementType::Math);
    assert_eq!(
        third.elements[1].content,
        ElementContent::Math {
            latex: "\\int_0^1 x dx".to_string(),
            display_mode: true,
        }
    );
    assert_eq!(third.elements[2].element_type, ElementType::Image);
    assert_eq!(third.elements[3].element_type, ElementType::Quote);
}

#[test]
fn test_click_states_increase_within_each_slide() {
    let slides = parse_slides(DECK, &ParserOptions::default());
    for slide in &slides {
        let mut previous: Option<u32> = None;
        for element in &slide.elements {
            if element.element_type == ElementType::Title {
                assert_eq!(element.click_state, 0);
                continue;
            }
            if let Some(prev) = previous {
                assert!(element.click_state > prev);
            }
            previous = Some(element.click_state);
        }
    }
}

#[test]
fn test_slide_count_bound() {
    // 2 delimiter lines + 2 heading breaks after content + 1
    let slides = parse_slides(DECK, &ParserOptions::default());
    assert!(slides.len() <= 5);
}

#[test]
fn test_delimiter_separates_even_when_next_block_is_empty() {
    let slides = parse_slides("# A\n---\n\n---\n# B", &ParserOptions::default());
    assert_eq!(slides.len(), 2);
    assert_eq!(
        slides[0].elements[0].content,
        ElementContent::Text("A".to_string())
    );
    assert_eq!(
        slides[1].elements[0].content,
        ElementContent::Text("B".to_string())
    );
}

#[test]
fn test_fenced_heading_does_not_break_slides() {
    let slides = parse_slides("# Top\n```\n# inner comment\n```", &ParserOptions::default());
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].elements.len(), 2);
    assert_eq!(slides[0].elements[0].element_type, ElementType::Title);
    assert_eq!(
        slides[0].elements[1].content,
        ElementContent::Text("# inner comment".to_string())
    );
}

#[test]
fn test_notes_and_checkboxes_in_delimiter_only_mode() {
    let options = ParserOptions {
        use_heading_pagination: false,
        ..Default::default()
    };
    let slides = parse_slides(
        "# Checklist\n[ ] pack\n### notes\nBring a charger.",
        &options,
    );
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].notes, "Bring a charger.");
    assert_eq!(slides[0].elements.len(), 2);
    assert_eq!(
        slides[0].elements[1].content,
        ElementContent::Text(r#"<input type="checkbox" disabled> pack"#.to_string())
    );
}

#[test]
fn test_parse_is_deterministic() {
    let options = ParserOptions::default();
    assert_eq!(parse_slides(DECK, &options), parse_slides(DECK, &options));
}
