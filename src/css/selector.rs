//! Selector model
//!
//! tree-sitter-css nests compound and complex selectors to the left
//! (`.a.b c` is `descendant(class(class(.a) .b) c)`). Specificity and preview
//! both want the flat reading of a selector, a first compound followed by
//! `(combinator, compound)` pairs, which is what this module extracts.

use tree_sitter::Node;

use crate::css::classifier::marked_name;
use crate::css::constants::*;
use crate::css::syntax::NodeKind;
use crate::language::tree_utils::{children, node_text};

/// Relation between two compound selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace
    Descendant,
    /// `>`
    Child,
    /// `+`
    NextSibling,
    /// `~`
    SubsequentSibling,
}

/// A single simple selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Type(String),
    Universal,
    /// `&`, stands for the selector of the enclosing rule
    Nesting,
    Class(String),
    Id(String),
    Attribute {
        name: String,
        operator: Option<String>,
        value: Option<String>,
    },
    PseudoClass {
        /// Lowercase name without the colon
        name: String,
        /// Source text starting at the colon, arguments included
        text: String,
        /// Selector arguments, e.g. the list of `:is(.a, #b)`
        arguments: Vec<ComplexSelector>,
    },
    PseudoElement {
        name: String,
        text: String,
        arguments: Vec<ComplexSelector>,
    },
}

/// Simple selectors without a combinator between them (e.g. `a.b:hover`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub simples: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Whether the compound refers to the enclosing rule with `&`
    pub fn has_nesting(&self) -> bool {
        self.simples
            .iter()
            .any(|simple| matches!(simple, SimpleSelector::Nesting))
    }
}

/// Compound selectors joined by combinators (e.g. `nav > a.b`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexSelector {
    pub first: CompoundSelector,
    pub rest: Vec<(Combinator, CompoundSelector)>,
}

impl ComplexSelector {
    /// Read a selector node into the flat model
    pub fn from_node(node: Node, source: &str) -> Self {
        let combinator = match NodeKind::of(node) {
            NodeKind::DescendantSelector => Some(Combinator::Descendant),
            NodeKind::ChildSelector => Some(Combinator::Child),
            NodeKind::AdjacentSiblingSelector => Some(Combinator::NextSibling),
            NodeKind::SiblingSelector => Some(Combinator::SubsequentSibling),
            _ => None,
        };

        let Some(combinator) = combinator else {
            // Compound parts carry the selector they are attached to as first child.
            // Id, attribute and pseudo parts bind looser than combinators, so that
            // child can be a whole complex selector: `a > b#c` is `id(child(a, b), c)`
            let mut selector = attached_selector(node)
                .map(|inner| Self::from_node(inner, source))
                .unwrap_or_default();
            selector
                .last_compound_mut()
                .simples
                .extend(simple_selector(node, source));
            return selector;
        };

        let mut operands = children(node).filter(|child| child.is_named());
        let mut selector = operands
            .next()
            .map(|left| Self::from_node(left, source))
            .unwrap_or_default();
        if let Some(right) = operands.last() {
            let right = Self::from_node(right, source);
            selector.rest.push((combinator, right.first));
            selector.rest.extend(right.rest);
        }
        selector
    }

    /// Compounds in source order, each with the combinator in front of it
    pub fn compounds(&self) -> impl Iterator<Item = (Option<Combinator>, &CompoundSelector)> {
        std::iter::once((None, &self.first)).chain(
            self.rest
                .iter()
                .map(|(combinator, compound)| (Some(*combinator), compound)),
        )
    }

    fn last_compound_mut(&mut self) -> &mut CompoundSelector {
        match self.rest.last_mut() {
            Some((_, compound)) => compound,
            None => &mut self.first,
        }
    }
}

fn attached_selector(node: Node<'_>) -> Option<Node<'_>> {
    let is_compound_part = matches!(
        NodeKind::of(node),
        NodeKind::ClassSelector
            | NodeKind::IdSelector
            | NodeKind::AttributeSelector
            | NodeKind::PseudoClassSelector
            | NodeKind::PseudoElementSelector
    );
    if !is_compound_part {
        return None;
    }
    node.child(0).filter(|child| child.is_named())
}

/// The simple selector a node adds on its own, without the selector it is attached to
fn simple_selector(node: Node, source: &str) -> Option<SimpleSelector> {
    match NodeKind::of(node) {
        NodeKind::TagName => Some(SimpleSelector::Type(node_text(node, source).to_string())),
        NodeKind::UniversalSelector => Some(SimpleSelector::Universal),
        NodeKind::NestingSelector => Some(SimpleSelector::Nesting),
        NodeKind::ClassSelector => marked_name(node, TOKEN_CLASS_MARKER)
            .map(|name| SimpleSelector::Class(node_text(name, source).to_string())),
        NodeKind::IdSelector => marked_name(node, TOKEN_ID_MARKER)
            .map(|name| SimpleSelector::Id(node_text(name, source).to_string())),
        NodeKind::AttributeSelector => attribute(node, source),
        NodeKind::PseudoClassSelector => {
            pseudo(node, source, TOKEN_PSEUDO_CLASS_MARKER).map(|(name, text, arguments)| {
                SimpleSelector::PseudoClass {
                    name,
                    text,
                    arguments,
                }
            })
        }
        NodeKind::PseudoElementSelector => {
            pseudo(node, source, TOKEN_PSEUDO_ELEMENT_MARKER).map(|(name, text, arguments)| {
                SimpleSelector::PseudoElement {
                    name,
                    text,
                    arguments,
                }
            })
        }
        // `ns|name`, only the element part matters
        NodeKind::NamespaceSelector => children(node)
            .filter(|child| child.is_named())
            .last()
            .map(|name| match node_text(name, source) {
                "*" => SimpleSelector::Universal,
                name => SimpleSelector::Type(name.to_string()),
            }),
        _ => None,
    }
}

fn attribute(node: Node, source: &str) -> Option<SimpleSelector> {
    let name = children(node).find(|child| NodeKind::of(*child) == NodeKind::AttributeName)?;

    let mut operator = None;
    let mut value = None;
    for child in children(node).skip_while(|child| child.id() != name.id()).skip(1) {
        if child.is_named() {
            value = Some(unquote(node_text(child, source)).to_string());
            break;
        }
        if child.kind().ends_with('=') {
            operator = Some(child.kind().to_string());
        }
    }

    Some(SimpleSelector::Attribute {
        name: node_text(name, source).to_string(),
        operator,
        value,
    })
}

fn pseudo(
    node: Node,
    source: &str,
    marker: &str,
) -> Option<(String, String, Vec<ComplexSelector>)> {
    let marker_node = children(node).find(|child| !child.is_named() && child.kind() == marker)?;
    let name = marked_name(node, marker)?;

    let arguments = children(node)
        .find(|child| NodeKind::of(*child) == NodeKind::Arguments)
        .map(|arguments| {
            children(arguments)
                .filter(|argument| NodeKind::of(*argument).is_selector())
                .map(|argument| ComplexSelector::from_node(argument, source))
                .collect()
        })
        .unwrap_or_default();

    let text = source
        .get(marker_node.start_byte()..node.end_byte())
        .unwrap_or_default()
        .to_string();

    Some((
        node_text(name, source).to_ascii_lowercase(),
        text,
        arguments,
    ))
}

fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}
