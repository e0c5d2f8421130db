//! Node classifier
//!
//! Maps the node under the cursor to the construct a hover is about.

use tree_sitter::Node;

use crate::css::constants::*;
use crate::css::syntax::NodeKind;
use crate::language::tree_utils::{children, node_text};

/// The construct under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject<'tree> {
    /// The property name of a declaration (or the declaration as a whole)
    PropertyName { declaration: Node<'tree> },
    /// A term in the value of a declaration
    PropertyValueTerm {
        declaration: Node<'tree>,
        term: Node<'tree>,
    },
    /// A whole selector item of a selector list
    Selector { selector: Node<'tree> },
    /// A pseudo-class selector (e.g. `:hover`)
    PseudoClass { selector: Node<'tree> },
    /// A pseudo-element selector (e.g. `::after`, or legacy `:after`)
    PseudoElement { selector: Node<'tree> },
    /// The keyword of an at-rule (e.g. `@media`)
    AtRuleKeyword { keyword: Node<'tree> },
    /// Anything without hover behavior
    Unsupported { node: Node<'tree> },
}

impl<'tree> Subject<'tree> {
    /// The node whose range the hover highlights
    pub fn node(&self) -> Node<'tree> {
        match *self {
            Subject::PropertyName { declaration } => declaration,
            Subject::PropertyValueTerm { declaration, .. } => declaration,
            Subject::Selector { selector } => selector,
            Subject::PseudoClass { selector } => selector,
            Subject::PseudoElement { selector } => selector,
            Subject::AtRuleKeyword { keyword } => keyword,
            Subject::Unsupported { node } => node,
        }
    }

    /// Name of the construct as written in the source, for documentation lookups
    ///
    /// Properties give the property name, pseudo selectors their name without
    /// colons and at-rules their keyword without `@`.
    pub fn name<'s>(&self, source: &'s str) -> Option<&'s str> {
        match *self {
            Subject::PropertyName { declaration }
            | Subject::PropertyValueTerm { declaration, .. } => children(declaration)
                .find(|child| NodeKind::of(*child) == NodeKind::PropertyName)
                .map(|name| node_text(name, source)),
            Subject::PseudoClass { selector } => {
                marked_name(selector, TOKEN_PSEUDO_CLASS_MARKER).map(|name| node_text(name, source))
            }
            Subject::PseudoElement { selector } => marked_name(selector, TOKEN_PSEUDO_ELEMENT_MARKER)
                .or_else(|| marked_name(selector, TOKEN_PSEUDO_CLASS_MARKER))
                .map(|name| node_text(name, source)),
            Subject::AtRuleKeyword { keyword } => {
                let text = node_text(keyword, source);
                Some(text.strip_prefix('@').unwrap_or(text))
            }
            Subject::Selector { .. } | Subject::Unsupported { .. } => None,
        }
    }
}

/// Classify the node under the cursor
pub fn classify<'tree>(node: Node<'tree>, source: &str) -> Subject<'tree> {
    let subject = match NodeKind::of(node) {
        NodeKind::Declaration => Subject::PropertyName { declaration: node },
        NodeKind::PropertyName => match node.parent() {
            Some(parent) if NodeKind::of(parent) == NodeKind::Declaration => {
                Subject::PropertyName { declaration: parent }
            }
            _ => Subject::Unsupported { node },
        },
        NodeKind::Value | NodeKind::CallExpression | NodeKind::FunctionName => value_term(node),
        NodeKind::Arguments => {
            if is_pseudo_arguments(node) {
                selector_item(node)
            } else {
                value_term(node)
            }
        }

        // `class_name` wraps its identifiers
        NodeKind::Identifier => match node.parent() {
            Some(parent) if NodeKind::of(parent) != NodeKind::Error => classify(parent, source),
            _ => Subject::Unsupported { node },
        },
        NodeKind::ClassName => match node.parent() {
            Some(parent)
                if NodeKind::of(parent) == NodeKind::PseudoClassSelector
                    && follows_token(node, TOKEN_PSEUDO_CLASS_MARKER) =>
            {
                pseudo_class(parent, source)
            }
            _ => selector_item(node),
        },
        NodeKind::TagName => match node.parent() {
            Some(parent)
                if NodeKind::of(parent) == NodeKind::PseudoElementSelector
                    && follows_token(node, TOKEN_PSEUDO_ELEMENT_MARKER) =>
            {
                Subject::PseudoElement { selector: parent }
            }
            _ => selector_item(node),
        },
        NodeKind::PseudoClassSelector => pseudo_class(node, source),
        NodeKind::PseudoElementSelector => Subject::PseudoElement { selector: node },
        NodeKind::UniversalSelector
        | NodeKind::NestingSelector
        | NodeKind::ClassSelector
        | NodeKind::IdSelector
        | NodeKind::IdName
        | NodeKind::AttributeSelector
        | NodeKind::AttributeName
        | NodeKind::DescendantSelector
        | NodeKind::ChildSelector
        | NodeKind::SiblingSelector
        | NodeKind::AdjacentSiblingSelector
        | NodeKind::NamespaceSelector
        | NodeKind::NamespaceName => selector_item(node),

        NodeKind::AtKeyword => Subject::AtRuleKeyword { keyword: node },
        NodeKind::KeywordToken => match node.parent() {
            Some(parent) if NodeKind::of(parent).is_at_statement() => {
                Subject::AtRuleKeyword { keyword: node }
            }
            _ => Subject::Unsupported { node },
        },
        NodeKind::Punctuation => classify_token(node, source),

        NodeKind::Stylesheet
        | NodeKind::RuleSet
        | NodeKind::Selectors
        | NodeKind::Block
        | NodeKind::Important
        | NodeKind::AtRule
        | NodeKind::ImportStatement
        | NodeKind::CharsetStatement
        | NodeKind::MediaStatement
        | NodeKind::NamespaceStatement
        | NodeKind::SupportsStatement
        | NodeKind::KeyframesStatement
        | NodeKind::KeyframesName
        | NodeKind::KeyframeBlockList
        | NodeKind::KeyframeBlock
        | NodeKind::Query
        | NodeKind::Comment
        | NodeKind::Error
        | NodeKind::Unknown => Subject::Unsupported { node },
    };

    log::debug!("Classified '{}' as {:?}", node.kind(), subject);
    subject
}

/// Anonymous tokens inside selectors and values take the subject of their parent
fn classify_token<'tree>(token: Node<'tree>, source: &str) -> Subject<'tree> {
    let Some(parent) = token.parent() else {
        return Subject::Unsupported { node: token };
    };

    match NodeKind::of(parent) {
        NodeKind::PseudoClassSelector if token.kind() == TOKEN_PSEUDO_CLASS_MARKER => {
            pseudo_class(parent, source)
        }
        NodeKind::PseudoElementSelector if token.kind() == TOKEN_PSEUDO_ELEMENT_MARKER => {
            Subject::PseudoElement { selector: parent }
        }
        NodeKind::Arguments if is_pseudo_arguments(parent) => selector_item(parent),
        NodeKind::Value | NodeKind::CallExpression | NodeKind::Arguments => value_term(parent),
        kind if kind.is_selector() => selector_item(parent),
        _ => Subject::Unsupported { node: token },
    }
}

fn pseudo_class<'tree>(selector: Node<'tree>, source: &str) -> Subject<'tree> {
    let is_legacy_element = marked_name(selector, TOKEN_PSEUDO_CLASS_MARKER)
        .map(|name| node_text(name, source).to_ascii_lowercase())
        .is_some_and(|name| LEGACY_PSEUDO_ELEMENTS.contains(&name.as_str()));

    if is_legacy_element {
        Subject::PseudoElement { selector }
    } else {
        Subject::PseudoClass { selector }
    }
}

/// Climb to the outermost selector, one item of a comma separated selector list
///
/// A selector error recovery left loose (outside any selector list) is unsupported,
/// in `.a { color: red` the declaration reads as `color:red`.
fn selector_item(node: Node<'_>) -> Subject<'_> {
    let mut current = node;
    while let Some(parent) = current.parent() {
        let kind = NodeKind::of(parent);
        if kind.is_selector() || (kind == NodeKind::Arguments && is_pseudo_arguments(parent)) {
            current = parent;
        } else if kind == NodeKind::Error {
            return Subject::Unsupported { node };
        } else {
            break;
        }
    }
    Subject::Selector { selector: current }
}

/// A value term belongs to the declaration it is written in
fn value_term(node: Node<'_>) -> Subject<'_> {
    let mut current = node;
    while let Some(parent) = current.parent() {
        match NodeKind::of(parent) {
            NodeKind::Declaration => {
                return Subject::PropertyValueTerm {
                    declaration: parent,
                    term: node,
                };
            }
            NodeKind::Block | NodeKind::RuleSet | NodeKind::Stylesheet => break,
            _ => current = parent,
        }
    }
    Subject::Unsupported { node }
}

fn is_pseudo_arguments(arguments: Node) -> bool {
    arguments.parent().is_some_and(|parent| {
        matches!(
            NodeKind::of(parent),
            NodeKind::PseudoClassSelector | NodeKind::PseudoElementSelector
        )
    })
}

fn follows_token(node: Node, token: &str) -> bool {
    node.prev_sibling()
        .is_some_and(|prev| !prev.is_named() && prev.kind() == token)
}

/// The named child directly following a marker token (e.g. the name after `::`)
pub(crate) fn marked_name<'tree>(node: Node<'tree>, token: &str) -> Option<Node<'tree>> {
    let mut seen_token = false;
    for child in children(node) {
        if seen_token {
            return child.is_named().then_some(child);
        }
        seen_token = !child.is_named() && child.kind() == token;
    }
    None
}
