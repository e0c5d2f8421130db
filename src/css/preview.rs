//! Markup preview of a selector
//!
//! Renders the element structure a selector matches as indented pseudo-HTML, e.g.
//! `div > .item a` becomes
//!
//! ```text
//! <div>
//!   <element class="item">
//!     …
//!       <a>
//! ```

use crate::css::constants::{DESCENDANT_LABEL, SIBLING_LABEL};
use crate::css::selector::{Combinator, ComplexSelector, CompoundSelector, SimpleSelector};

const ROOT: usize = 0;

/// A synthesized element, built from one compound selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ElementPreview {
    name: Option<String>,
    attributes: Vec<(String, String)>,
}

impl ElementPreview {
    fn from_compound(compound: &CompoundSelector) -> Self {
        let mut element = Self::default();
        element.merge(compound);
        element
    }

    fn merge(&mut self, compound: &CompoundSelector) {
        for simple in &compound.simples {
            match simple {
                SimpleSelector::Type(name) => {
                    self.name.get_or_insert_with(|| name.clone());
                }
                SimpleSelector::Universal | SimpleSelector::Nesting => {}
                SimpleSelector::Class(name) => self.add_attribute("class", name),
                SimpleSelector::Id(name) => self.add_attribute("id", name),
                SimpleSelector::Attribute {
                    name,
                    operator,
                    value,
                } => {
                    let value = attribute_value(operator.as_deref(), value.as_deref());
                    self.add_attribute(name, &value);
                }
                SimpleSelector::PseudoClass { text, .. }
                | SimpleSelector::PseudoElement { text, .. } => self.add_attribute(text, ""),
            }
        }
    }

    /// Repeated attributes collect their values, like repeated classes do
    fn add_attribute(&mut self, name: &str, value: &str) {
        if let Some((_, existing)) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            if !value.is_empty() {
                if !existing.is_empty() {
                    existing.push(' ');
                }
                existing.push_str(value);
            }
            return;
        }
        self.attributes.push((name.to_string(), value.to_string()));
    }

    fn render(&self) -> String {
        let mut content = String::from("<");
        content.push_str(self.name.as_deref().unwrap_or("element"));
        for (name, value) in &self.attributes {
            content.push(' ');
            content.push_str(name);
            if !value.is_empty() {
                content.push_str(&format!("=\"{}\"", value));
            }
        }
        content.push('>');
        content
    }
}

/// What an attribute selector's operator says about the value
fn attribute_value(operator: Option<&str>, value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match operator {
        Some("|=") => format!("{value}-{DESCENDANT_LABEL}"),
        Some("^=") => format!("{value}{DESCENDANT_LABEL}"),
        Some("$=") => format!("{DESCENDANT_LABEL}{value}"),
        Some("~=") => format!(" {DESCENDANT_LABEL} {value} {DESCENDANT_LABEL} "),
        Some("*=") => format!("{DESCENDANT_LABEL}{value}{DESCENDANT_LABEL}"),
        _ => value.to_string(),
    }
}

#[derive(Debug, Clone)]
enum PreviewItem {
    Root,
    Element(ElementPreview),
    Label(&'static str),
}

#[derive(Debug, Clone)]
struct PreviewNode {
    item: PreviewItem,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// How the next compound relates to the current element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Descendant,
    Child,
    NextSibling,
    SubsequentSibling,
}

impl From<Combinator> for Relation {
    fn from(combinator: Combinator) -> Self {
        match combinator {
            Combinator::Descendant => Relation::Descendant,
            Combinator::Child => Relation::Child,
            Combinator::NextSibling => Relation::NextSibling,
            Combinator::SubsequentSibling => Relation::SubsequentSibling,
        }
    }
}

/// Builds the preview level by level, from the outermost nesting rule inwards
#[derive(Debug, Clone)]
pub struct SelectorPreview {
    nodes: Vec<PreviewNode>,
    current: usize,
    relation: Option<Relation>,
}

impl SelectorPreview {
    pub fn new() -> Self {
        Self {
            nodes: vec![PreviewNode {
                item: PreviewItem::Root,
                parent: None,
                children: Vec::new(),
            }],
            current: ROOT,
            relation: None,
        }
    }

    /// Add the selector of the next nesting level
    ///
    /// A level continues below the previous one as a descendant, unless its first
    /// compound uses `&`, in which case it refines the previous element.
    pub fn push_selector(&mut self, selector: &ComplexSelector) {
        for (index, (combinator, compound)) in selector.compounds().enumerate() {
            if let Some(combinator) = combinator {
                self.relation = Some(combinator.into());
            }

            let refines_parent = index == 0
                && compound.has_nesting()
                && self.current != ROOT
                && self.relation == Some(Relation::Descendant);
            if refines_parent {
                if let PreviewItem::Element(element) = &mut self.nodes[self.current].item {
                    element.merge(compound);
                    continue;
                }
            }

            self.push_compound(compound);
        }
    }

    fn push_compound(&mut self, compound: &CompoundSelector) {
        match self.relation {
            Some(Relation::Descendant) => {
                self.current = self.add_child(self.current, PreviewItem::Label(DESCENDANT_LABEL));
            }
            Some(Relation::NextSibling | Relation::SubsequentSibling) => {
                if let Some(parent) = self.nodes[self.current].parent {
                    self.current = parent;
                }
            }
            Some(Relation::Child) | None => {}
        }
        if self.relation == Some(Relation::SubsequentSibling) {
            self.add_child(self.current, PreviewItem::Label(SIBLING_LABEL));
        }

        let element = ElementPreview::from_compound(compound);
        self.current = self.add_child(self.current, PreviewItem::Element(element));
        // Without an explicit combinator the next compound is a descendant
        self.relation = Some(Relation::Descendant);
    }

    fn add_child(&mut self, parent: usize, item: PreviewItem) -> usize {
        let index = self.nodes.len();
        self.nodes.push(PreviewNode {
            item,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(index);
        index
    }

    /// Render the preview, two spaces of indentation per level
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        self.render_children(ROOT, 0, &mut lines);
        lines.join("\n")
    }

    fn render_children(&self, index: usize, depth: usize, lines: &mut Vec<String>) {
        for &child in &self.nodes[index].children {
            let indent = "  ".repeat(depth);
            match &self.nodes[child].item {
                PreviewItem::Element(element) => lines.push(format!("{indent}{}", element.render())),
                PreviewItem::Label(label) => lines.push(format!("{indent}{label}")),
                PreviewItem::Root => {}
            }
            self.render_children(child, depth + 1, lines);
        }
    }
}

impl Default for SelectorPreview {
    fn default() -> Self {
        Self::new()
    }
}
