use crate::css::hover::*;

use crate::css::data::CssDataset;
use crate::css::parser::Dialect;
use crate::css::settings::{HoverCapabilities, HoverSettings};
use crate::test_utils::{parse_document, split_cursor};
use std::sync::Arc;
use tower_lsp::lsp_types::{
    Hover, HoverContents, LanguageString, MarkedString, MarkupKind, Position, Range,
};

const SPECIFICITY_LINK: &str =
    "[Selector Specificity](https://developer.mozilla.org/en-US/docs/Web/CSS/Specificity)";

fn provider(capabilities: HoverCapabilities, settings: HoverSettings) -> CssHoverProvider {
    CssHoverProvider::with_config(
        Arc::new(CssDataset::builtin().clone()),
        capabilities,
        settings,
    )
}

/// Hover at the `|` cursor, passing the offset in UTF-16 code units
fn hover_with(provider: &CssHoverProvider, marked: &str, dialect: Dialect) -> Option<Hover> {
    let (source, byte) = split_cursor(marked);
    let offset = source[..byte].encode_utf16().count();
    let (document, tree) = parse_document(&source);
    provider.compute_hover(&document, offset, &tree, dialect)
}

fn hover_at(marked: &str, dialect: Dialect) -> Option<Hover> {
    hover_with(&CssHoverProvider::new(), marked, dialect)
}

/// Text of a markup hover
fn markup(hover: &Hover) -> &str {
    match &hover.contents {
        HoverContents::Markup(content) => &content.value,
        other => panic!("Expected markup content, got {:?}", other),
    }
}

fn range(start: (u32, u32), end: (u32, u32)) -> Range {
    Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

#[test]
fn test_property_hover() {
    let hover = hover_at(".test { |color: blue; }", Dialect::Css).unwrap();
    match &hover.contents {
        HoverContents::Markup(content) => {
            assert_eq!(content.kind, MarkupKind::Markdown);
            assert_eq!(
                content.value,
                "Color of an element's text\n\nSyntax: <color>\n\n[MDN Reference](https://developer.mozilla.org/docs/Web/CSS/color)"
            );
        }
        other => panic!("Expected markup content, got {:?}", other),
    }
    assert_eq!(hover.range, Some(range((0, 8), (0, 20))));
}

#[test]
fn test_selector_hover() {
    let hover = hover_at(".|foo {}", Dialect::Css).unwrap();
    assert_eq!(
        hover.contents,
        HoverContents::Array(vec![
            MarkedString::LanguageString(LanguageString {
                language: "html".to_string(),
                value: "<element class=\"foo\">".to_string(),
            }),
            MarkedString::String(format!("{SPECIFICITY_LINK}: (0, 1, 0)")),
        ])
    );
    assert_eq!(hover.range, Some(range((0, 0), (0, 4))));
}

fn preview_and_specificity(hover: &Hover) -> (&str, &str) {
    match &hover.contents {
        HoverContents::Array(items) => match items.as_slice() {
            [MarkedString::LanguageString(preview), MarkedString::String(line)] => {
                (&preview.value, line)
            }
            other => panic!("Expected a selector hover, got {:?}", other),
        },
        other => panic!("Expected a selector hover, got {:?}", other),
    }
}

#[test]
fn test_class_inside_selector_hover() {
    let hover = hover_at("a:not(.b|c) {}", Dialect::Css).unwrap();
    let (preview, line) = preview_and_specificity(&hover);
    assert_eq!(preview, "<a :not(.bc)>");
    assert_eq!(line, format!("{SPECIFICITY_LINK}: (0, 1, 1)"));
    assert_eq!(hover.range, Some(range((0, 0), (0, 10))));

    let hover = hover_at(".a { &.ac|tive {} }", Dialect::Scss).unwrap();
    let (preview, line) = preview_and_specificity(&hover);
    assert_eq!(preview, "<element class=\"a active\">");
    assert_eq!(line, format!("{SPECIFICITY_LINK}: (0, 1, 0)"));
    assert_eq!(hover.range, Some(range((0, 5), (0, 13))));
}

#[test]
fn test_combinator_before_pseudo_class_hover() {
    let hover = hover_at("#nav > .it|em:hover {}", Dialect::Css).unwrap();
    let (preview, line) = preview_and_specificity(&hover);
    assert_eq!(
        preview,
        "<element id=\"nav\">\n  <element class=\"item\" :hover>"
    );
    assert_eq!(line, format!("{SPECIFICITY_LINK}: (1, 2, 0)"));
}

#[test]
fn test_leading_whitespace_has_empty_contents() {
    let hover = hover_at("  |  .a {}", Dialect::Css).unwrap();
    assert_eq!(hover.contents, HoverContents::Array(vec![]));

    let hover = hover_at(".a {}\n\n|", Dialect::Css).unwrap();
    assert_eq!(hover.contents, HoverContents::Array(vec![]));
}

#[test]
fn test_unterminated_rule_has_no_selector_hover() {
    let hover = hover_at(".a { colo|r: red", Dialect::Css).unwrap();
    assert_eq!(hover.contents, HoverContents::Array(vec![]));
    assert_eq!(hover.range, Some(range((0, 5), (0, 10))));
}

#[test]
fn test_nested_selector_hover() {
    let hover = hover_at("div { d|iv {} }", Dialect::Scss).unwrap();
    assert_eq!(
        hover.contents,
        HoverContents::Array(vec![
            MarkedString::LanguageString(LanguageString {
                language: "html".to_string(),
                value: "<div>\n  \u{2026}\n    <div>".to_string(),
            }),
            MarkedString::String(format!("{SPECIFICITY_LINK}: (0, 0, 1)")),
        ])
    );
    assert_eq!(hover.range, Some(range((0, 6), (0, 9))));
}

#[test]
fn test_at_root_has_no_documentation() {
    let hover = hover_at(".test { @|at-root { }", Dialect::Scss).unwrap();
    assert_eq!(hover.contents, HoverContents::Array(vec![]));
}

#[test]
fn test_value_term_documents_property() {
    let hover = hover_at(".a { color: bl|ue; }", Dialect::Css).unwrap();
    assert!(markup(&hover).starts_with("Color of an element's text"));
    assert_eq!(hover.range, Some(range((0, 5), (0, 17))));
}

#[test]
fn test_vendor_prefixed_property() {
    let hover = hover_at(".a { -webkit-transi|tion: none; }", Dialect::Css).unwrap();
    assert!(markup(&hover).contains("https://developer.mozilla.org/docs/Web/CSS/transition"));
}

#[test]
fn test_unknown_property_has_empty_contents() {
    let hover = hover_at(".a { co|lr: red; }", Dialect::Css).unwrap();
    assert_eq!(hover.contents, HoverContents::Array(vec![]));
    assert_eq!(hover.range, Some(range((0, 5), (0, 15))));
}

#[test]
fn test_pseudo_class_hover() {
    let hover = hover_at(".test:h|over {}", Dialect::Css).unwrap();
    let text = markup(&hover);
    assert!(text.starts_with("Applies while the user designates an element"));
    assert!(text.ends_with("[MDN Reference](https://developer.mozilla.org/docs/Web/CSS/:hover)"));
}

#[test]
fn test_pseudo_element_hover() {
    let hover = hover_at(".test::a|fter {}", Dialect::Css).unwrap();
    assert!(markup(&hover).contains("https://developer.mozilla.org/docs/Web/CSS/::after"));

    // The CSS2 single colon form documents the pseudo-element
    let hover = hover_at(".test:be|fore {}", Dialect::Css).unwrap();
    assert!(markup(&hover).contains("https://developer.mozilla.org/docs/Web/CSS/::before"));
}

#[test]
fn test_at_rule_hover() {
    let hover = hover_at("@me|dia print { }", Dialect::Css).unwrap();
    assert!(markup(&hover).contains("https://developer.mozilla.org/docs/Web/CSS/@media"));
    assert_eq!(hover.range, Some(range((0, 0), (0, 6))));
}

#[test]
fn test_status_banner() {
    let hover = hover_at(".a { zo|om: 2; }", Dialect::Css).unwrap();
    assert!(markup(&hover).starts_with("\u{1F6A8}\u{FE0F} Property is nonstandard. Avoid using it."));
}

#[test]
fn test_plain_text_client() {
    let provider = provider(HoverCapabilities::PLAIN_TEXT, HoverSettings::default());
    let hover = hover_with(&provider, ".test { |color: blue; }", Dialect::Css).unwrap();
    match &hover.contents {
        HoverContents::Markup(content) => {
            assert_eq!(content.kind, MarkupKind::PlainText);
            assert_eq!(
                content.value,
                "Color of an element's text\n\nSyntax: <color>\n\nMDN Reference (https://developer.mozilla.org/docs/Web/CSS/color)"
            );
        }
        other => panic!("Expected markup content, got {:?}", other),
    }

    let hover = hover_with(&provider, ".|foo {}", Dialect::Css).unwrap();
    let HoverContents::Array(items) = &hover.contents else {
        panic!("Expected selector hover, got {:?}", hover.contents);
    };
    assert_eq!(
        items[1],
        MarkedString::String(
            "Selector Specificity (https://developer.mozilla.org/en-US/docs/Web/CSS/Specificity): (0, 1, 0)"
                .to_string()
        )
    );
}

#[test]
fn test_plain_text_never_contains_markdown() {
    let provider = provider(HoverCapabilities::PLAIN_TEXT, HoverSettings::default());
    let sources = [
        ".a { |color: red; }",
        ".a { |display: none; }",
        ".a { |zoom: 1; }",
        "a:|hover {}",
        "a::|after {}",
        "@|media print {}",
    ];
    for source in sources {
        let hover = hover_with(&provider, source, Dialect::Css).unwrap();
        let text = markup(&hover);
        assert!(!text.contains('['), "{source}: {text}");
        assert!(!text.contains("]("), "{source}: {text}");
        assert!(!text.contains('`'), "{source}: {text}");
    }
}

#[test]
fn test_references_disabled() {
    let settings = HoverSettings {
        documentation: true,
        references: false,
    };
    let provider = provider(HoverCapabilities::LATEST, settings);

    let hover = hover_with(&provider, ".test { |color: blue; }", Dialect::Css).unwrap();
    assert_eq!(markup(&hover), "Color of an element's text\n\nSyntax: <color>");

    let hover = hover_with(&provider, ".|foo {}", Dialect::Css).unwrap();
    let HoverContents::Array(items) = &hover.contents else {
        panic!("Expected selector hover, got {:?}", hover.contents);
    };
    assert_eq!(
        items[1],
        MarkedString::String("Selector Specificity: (0, 1, 0)".to_string())
    );
}

#[test]
fn test_documentation_disabled() {
    let settings = HoverSettings {
        documentation: false,
        references: false,
    };
    let provider = provider(HoverCapabilities::LATEST, settings);
    let hover = hover_with(&provider, ".test { |color: blue; }", Dialect::Css).unwrap();
    assert_eq!(hover.contents, HoverContents::Array(vec![]));
}

#[test]
fn test_hover_is_idempotent() {
    let provider = CssHoverProvider::new();
    let (source, offset) = split_cursor(".list { #nav > .it|em:hover { color: red } }");
    let (document, tree) = parse_document(&source);

    let first = provider.compute_hover(&document, offset, &tree, Dialect::Scss);
    let second = provider.compute_hover(&document, offset, &tree, Dialect::Scss);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_offsets_count_utf16_units() {
    // The emoji takes two UTF-16 units and four bytes
    let hover = hover_at("/* \u{1F600} */ .a { |color: red; }", Dialect::Css).unwrap();
    assert!(markup(&hover).starts_with("Color of an element's text"));
    assert_eq!(hover.range, Some(range((0, 14), (0, 25))));
}

#[test]
fn test_offset_outside_document() {
    let provider = CssHoverProvider::new();
    let (document, tree) = parse_document(".a { color: red; }");
    assert!(provider.compute_hover(&document, 100, &tree, Dialect::Css).is_none());
}

#[test]
fn test_hover_by_position() {
    let provider = CssHoverProvider::new();
    let (document, tree) = parse_document(".a {\n  color: red;\n}\n");
    let hover = provider
        .hover(&document, Position::new(1, 4), &tree, Dialect::Css)
        .unwrap();
    assert!(markup(&hover).starts_with("Color of an element's text"));
    assert_eq!(hover.range, Some(range((1, 2), (1, 13))));

    assert!(
        provider
            .hover(&document, Position::new(10, 0), &tree, Dialect::Css)
            .is_none()
    );
}

#[test]
fn test_custom_data() {
    let mut dataset = CssDataset::builtin().clone();
    dataset.merge(
        CssDataset::from_json(
            r#"{ "properties": [{ "name": "-acme-font", "description": "Font of the Acme theme" }] }"#,
        )
        .unwrap(),
    );
    let provider = CssHoverProvider::with_config(
        Arc::new(dataset),
        HoverCapabilities::LATEST,
        HoverSettings::default(),
    );
    let hover = hover_with(&provider, ".a { -acme-f|ont: none; }", Dialect::Css).unwrap();
    assert_eq!(markup(&hover), "Font of the Acme theme");
}
