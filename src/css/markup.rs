//! Hover formatter
//!
//! Renders documentation entries and selector reports into hover contents, as
//! markdown or plain text depending on what the client can display.

use std::sync::OnceLock;

use regex::Regex;
use tower_lsp::lsp_types::{
    HoverContents, LanguageString, MarkedString, MarkupContent, MarkupKind,
};

use crate::css::constants::*;
use crate::css::data::{DataEntry, EntryKind, EntryStatus, Reference};
use crate::css::settings::{HoverCapabilities, HoverSettings};
use crate::css::specificity::SelectorReport;

/// Hover contents with nothing to show
pub fn empty_content() -> HoverContents {
    HoverContents::Array(Vec::new())
}

/// Hover contents documenting a property, pseudo selector or at-rule
pub fn entry_content(
    entry: &DataEntry,
    kind: EntryKind,
    capabilities: HoverCapabilities,
    settings: HoverSettings,
) -> HoverContents {
    let text = entry_text(entry, kind, capabilities.supports_markdown, settings);
    if text.is_empty() {
        return empty_content();
    }

    let kind = if capabilities.supports_markdown {
        MarkupKind::Markdown
    } else {
        MarkupKind::PlainText
    };
    HoverContents::Markup(MarkupContent { kind, value: text })
}

/// Hover contents for a selector: the markup preview followed by the specificity
pub fn selector_content(
    report: &SelectorReport,
    capabilities: HoverCapabilities,
    settings: HoverSettings,
) -> HoverContents {
    HoverContents::Array(vec![
        MarkedString::LanguageString(LanguageString {
            language: PREVIEW_LANGUAGE.to_string(),
            value: report.preview.clone(),
        }),
        MarkedString::String(specificity_line(report, capabilities, settings)),
    ])
}

fn specificity_line(
    report: &SelectorReport,
    capabilities: HoverCapabilities,
    settings: HoverSettings,
) -> String {
    let specificity = report.specificity;
    match (settings.references, capabilities.supports_markdown) {
        (false, _) => format!("{SPECIFICITY_LABEL}: {specificity}"),
        (true, true) => format!("[{SPECIFICITY_LABEL}]({SPECIFICITY_URL}): {specificity}"),
        (true, false) => format!("{SPECIFICITY_LABEL} ({SPECIFICITY_URL}): {specificity}"),
    }
}

/// Documentation text of an entry
///
/// Sections are the status banner, the description, the syntax and the
/// references, each included only when present and enabled.
pub fn entry_text(
    entry: &DataEntry,
    kind: EntryKind,
    markdown: bool,
    settings: HoverSettings,
) -> String {
    let mut text = String::new();

    if settings.documentation {
        if let Some(banner) = entry.status.and_then(|status| status_banner(status, kind)) {
            text.push_str(&banner);
        }
        if let Some(description) = entry.description.as_deref().map(str::trim) {
            if markdown {
                text.push_str(description);
            } else {
                text.push_str(&strip_markdown(description));
            }
        }
        if let Some(syntax) = entry.syntax.as_deref().filter(|syntax| !syntax.is_empty()) {
            text.push_str("\n\nSyntax: ");
            text.push_str(syntax);
        }
    }

    if settings.references && !entry.references.is_empty() {
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        let links: Vec<String> = entry
            .references
            .iter()
            .map(|reference| reference_link(reference, markdown))
            .collect();
        text.push_str(&links.join(" | "));
    }

    text
}

fn reference_link(reference: &Reference, markdown: bool) -> String {
    if markdown {
        format!("[{}]({})", reference.name, reference.url)
    } else {
        format!("{} ({})", reference.name, reference.url)
    }
}

/// Warning shown above the documentation of entries that are not standard
fn status_banner(status: EntryStatus, kind: EntryKind) -> Option<String> {
    let subject = match kind {
        EntryKind::Property => "Property",
        EntryKind::PseudoClass => "Pseudo-class",
        EntryKind::PseudoElement => "Pseudo-element",
        EntryKind::AtRule => "At-rule",
    };
    match status {
        EntryStatus::Standard => None,
        EntryStatus::Experimental => Some(format!(
            "\u{26A0}\u{FE0F} {subject} is experimental. Be cautious when using it.\n\n"
        )),
        EntryStatus::Nonstandard => Some(format!(
            "\u{1F6A8}\u{FE0F} {subject} is nonstandard. Avoid using it.\n\n"
        )),
        EntryStatus::Obsolete => Some(format!(
            "\u{1F6A8}\u{FE0F} {subject} is obsolete. Avoid using it.\n\n"
        )),
    }
}

/// Reduce markdown to readable plain text
///
/// Links become `text (url)`, code spans and emphasis markers are dropped and
/// escaped characters are unescaped.
pub fn strip_markdown(text: &str) -> String {
    static PATTERNS: OnceLock<Option<(Regex, Regex, Regex)>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        let link = Regex::new(r"\[([^\]]*)\]\(([^)\s]*)\)").ok()?;
        let emphasis = Regex::new(r"`+|\*\*|__").ok()?;
        let escape = Regex::new(r"\\([\\`*_{}\[\]()#+\-.!<>])").ok()?;
        Some((link, emphasis, escape))
    });

    let Some((link, emphasis, escape)) = patterns else {
        return text.to_string();
    };

    let text = link.replace_all(text, "$1 ($2)");
    let text = emphasis.replace_all(&text, "");
    let text = escape.replace_all(&text, "$1");
    // Brackets left over from unbalanced link syntax
    text.replace(['[', ']'], "")
}
