//! Selector specificity
//!
//! Computes the `(id, class, type)` weight of selectors, and walks the rules a
//! selector is nested in to build its cumulative weight and markup preview.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use tree_sitter::Node;

use crate::css::constants::*;
use crate::css::parser::Dialect;
use crate::css::preview::SelectorPreview;
use crate::css::selector::{ComplexSelector, CompoundSelector, SimpleSelector};
use crate::css::syntax::NodeKind;
use crate::language::tree_utils::{children, node_text};

/// CSS specificity, compared lexicographically with ids most significant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity {
    /// Id selectors
    pub ids: u32,
    /// Class selectors, attribute selectors and pseudo-classes
    pub classes: u32,
    /// Type selectors and pseudo-elements
    pub types: u32,
}

impl Specificity {
    pub const ZERO: Self = Self::new(0, 0, 0);
    pub const ID: Self = Self::new(1, 0, 0);
    pub const CLASS: Self = Self::new(0, 1, 0);
    pub const TYPE: Self = Self::new(0, 0, 1);

    pub const fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self {
            ids,
            classes,
            types,
        }
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.ids.saturating_add(other.ids),
            self.classes.saturating_add(other.classes),
            self.types.saturating_add(other.types),
        )
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Specificity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.ids, self.classes, self.types)
    }
}

/// Specificity of a complex selector, the sum over its compounds
pub fn selector_specificity(selector: &ComplexSelector) -> Specificity {
    selector
        .compounds()
        .map(|(_, compound)| compound_specificity(compound))
        .sum()
}

pub fn compound_specificity(compound: &CompoundSelector) -> Specificity {
    compound.simples.iter().map(simple_specificity).sum()
}

pub fn simple_specificity(simple: &SimpleSelector) -> Specificity {
    match simple {
        SimpleSelector::Id(_) => Specificity::ID,
        SimpleSelector::Class(_) | SimpleSelector::Attribute { .. } => Specificity::CLASS,
        SimpleSelector::Type(_) => Specificity::TYPE,
        SimpleSelector::Universal | SimpleSelector::Nesting => Specificity::ZERO,
        SimpleSelector::PseudoElement {
            name, arguments, ..
        } => {
            if name == "slotted" {
                Specificity::TYPE + most_specific_argument(arguments)
            } else {
                Specificity::TYPE
            }
        }
        SimpleSelector::PseudoClass {
            name, arguments, ..
        } => pseudo_class_specificity(name, arguments),
    }
}

fn pseudo_class_specificity(name: &str, arguments: &[ComplexSelector]) -> Specificity {
    let name = VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name);

    match name {
        "where" => Specificity::ZERO,
        "is" | "not" | "has" | "matches" | "any" if !arguments.is_empty() => {
            most_specific_argument(arguments)
        }
        "host" | "host-context" | "nth-child" | "nth-last-child" => {
            Specificity::CLASS + most_specific_argument(arguments)
        }
        name if LEGACY_PSEUDO_ELEMENTS.contains(&name) => Specificity::TYPE,
        _ => Specificity::CLASS,
    }
}

/// Weight of a selector list argument: the most specific item, never the sum
///
/// `:is(#a, .b c)` weighs `(1, 0, 0)`, not `(1, 1, 1)`.
pub fn most_specific_argument(arguments: &[ComplexSelector]) -> Specificity {
    arguments
        .iter()
        .map(selector_specificity)
        .max()
        .unwrap_or_default()
}

/// Specificity and preview of a selector in the context of its nesting rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorReport {
    /// Specificity of the selector as written
    pub specificity: Specificity,
    /// Sum over the nesting levels, outermost rule to the selector itself
    pub cumulative: Specificity,
    /// Specificity of each level, outermost first, the selector itself last
    pub levels: Vec<Specificity>,
    /// Markup preview of the elements the selector matches
    pub preview: String,
}

/// Analyze a selector item (a child of a `selectors` node)
pub fn analyze_selector(selector: Node, source: &str, dialect: Dialect) -> SelectorReport {
    let own = ComplexSelector::from_node(selector, source);
    let ancestors: Vec<ComplexSelector> = nesting_context(selector, source, dialect)
        .into_iter()
        .map(|node| ComplexSelector::from_node(node, source))
        .collect();

    let mut preview = SelectorPreview::new();
    let mut levels = Vec::with_capacity(ancestors.len() + 1);
    for ancestor in ancestors.iter().chain(std::iter::once(&own)) {
        preview.push_selector(ancestor);
        levels.push(selector_specificity(ancestor));
    }

    let specificity = selector_specificity(&own);
    SelectorReport {
        specificity,
        cumulative: levels.iter().copied().sum(),
        levels,
        preview: preview.render(),
    }
}

/// First selectors of the rules enclosing the selector's own rule, outermost first
///
/// The walk ends at the stylesheet and, in SCSS, at an `@at-root` rule which puts
/// its content back at the top level.
pub fn nesting_context<'tree>(
    selector: Node<'tree>,
    source: &str,
    dialect: Dialect,
) -> Vec<Node<'tree>> {
    let own_rule = selector
        .parent()
        .filter(|parent| NodeKind::of(*parent) == NodeKind::Selectors)
        .and_then(|selectors| selectors.parent())
        .filter(|rule| NodeKind::of(*rule) == NodeKind::RuleSet);
    let Some(own_rule) = own_rule else {
        return Vec::new();
    };

    let mut ancestors = Vec::new();
    let mut current = own_rule.parent();
    while let Some(node) = current {
        match NodeKind::of(node) {
            NodeKind::RuleSet => ancestors.extend(first_selector(node)),
            NodeKind::AtRule if dialect == Dialect::Scss && is_at_root(node, source) => break,
            NodeKind::Stylesheet => break,
            _ => {}
        }
        current = node.parent();
    }

    ancestors.reverse();
    ancestors
}

fn first_selector(rule: Node<'_>) -> Option<Node<'_>> {
    let selectors = children(rule).find(|child| NodeKind::of(*child) == NodeKind::Selectors)?;
    children(selectors).find(|child| NodeKind::of(*child).is_selector())
}

fn is_at_root(rule: Node, source: &str) -> bool {
    children(rule)
        .find(|child| NodeKind::of(*child) == NodeKind::AtKeyword)
        .is_some_and(|keyword| {
            node_text(keyword, source)
                .trim_start_matches('@')
                .eq_ignore_ascii_case(AT_ROOT)
        })
}
