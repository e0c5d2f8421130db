//! Closed vocabulary of stylesheet node kinds
//!
//! tree-sitter reports node kinds as strings. Everything downstream matches on
//! `NodeKind` instead, so supporting a new kind of node means touching every match
//! that has to care about it.

use tree_sitter::Node;

use crate::css::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Stylesheet,
    RuleSet,
    Selectors,
    Block,
    Declaration,
    PropertyName,
    Important,

    // Selectors
    TagName,
    UniversalSelector,
    NestingSelector,
    ClassSelector,
    ClassName,
    /// A fragment of a name, `class_name` is made of these
    Identifier,
    IdSelector,
    IdName,
    AttributeSelector,
    AttributeName,
    PseudoClassSelector,
    PseudoElementSelector,
    DescendantSelector,
    ChildSelector,
    SiblingSelector,
    AdjacentSiblingSelector,
    NamespaceSelector,
    NamespaceName,
    Arguments,

    // At-rules
    AtRule,
    AtKeyword,
    ImportStatement,
    CharsetStatement,
    MediaStatement,
    NamespaceStatement,
    SupportsStatement,
    KeyframesStatement,
    KeyframesName,
    KeyframeBlockList,
    KeyframeBlock,
    /// Any part of a media or supports query
    Query,

    // Values
    /// A value term of a declaration (keyword, number, string, color, unit, ...)
    Value,
    CallExpression,
    FunctionName,

    Comment,
    Error,
    /// Anonymous at-keyword token of a statement (e.g. `@media`)
    KeywordToken,
    /// Any other anonymous token (`{`, `.`, `:`, `,` ...)
    Punctuation,
    /// Named node kinds the hover engine does not know about
    Unknown,
}

impl NodeKind {
    /// Kind of a tree-sitter node
    pub fn of(node: Node) -> Self {
        if !node.is_named() && !node.is_error() {
            return if node.kind().starts_with('@') {
                NodeKind::KeywordToken
            } else {
                NodeKind::Punctuation
            };
        }
        Self::from_kind(node.kind())
    }

    /// Kind for a named tree-sitter kind string
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            NODE_STYLESHEET => NodeKind::Stylesheet,
            NODE_RULE_SET => NodeKind::RuleSet,
            NODE_SELECTORS => NodeKind::Selectors,
            NODE_BLOCK => NodeKind::Block,
            NODE_DECLARATION => NodeKind::Declaration,
            NODE_PROPERTY_NAME => NodeKind::PropertyName,
            NODE_IMPORTANT => NodeKind::Important,

            NODE_TAG_NAME => NodeKind::TagName,
            NODE_UNIVERSAL_SELECTOR => NodeKind::UniversalSelector,
            NODE_NESTING_SELECTOR => NodeKind::NestingSelector,
            NODE_CLASS_SELECTOR => NodeKind::ClassSelector,
            NODE_CLASS_NAME => NodeKind::ClassName,
            NODE_IDENTIFIER | NODE_ESCAPE_SEQUENCE => NodeKind::Identifier,
            NODE_ID_SELECTOR => NodeKind::IdSelector,
            NODE_ID_NAME => NodeKind::IdName,
            NODE_ATTRIBUTE_SELECTOR => NodeKind::AttributeSelector,
            NODE_ATTRIBUTE_NAME => NodeKind::AttributeName,
            NODE_PSEUDO_CLASS_SELECTOR => NodeKind::PseudoClassSelector,
            NODE_PSEUDO_ELEMENT_SELECTOR => NodeKind::PseudoElementSelector,
            NODE_DESCENDANT_SELECTOR => NodeKind::DescendantSelector,
            NODE_CHILD_SELECTOR => NodeKind::ChildSelector,
            NODE_SIBLING_SELECTOR => NodeKind::SiblingSelector,
            NODE_ADJACENT_SIBLING_SELECTOR => NodeKind::AdjacentSiblingSelector,
            NODE_NAMESPACE_SELECTOR => NodeKind::NamespaceSelector,
            NODE_NAMESPACE_NAME => NodeKind::NamespaceName,
            NODE_ARGUMENTS => NodeKind::Arguments,

            NODE_AT_RULE => NodeKind::AtRule,
            NODE_AT_KEYWORD => NodeKind::AtKeyword,
            NODE_IMPORT_STATEMENT => NodeKind::ImportStatement,
            NODE_CHARSET_STATEMENT => NodeKind::CharsetStatement,
            NODE_MEDIA_STATEMENT => NodeKind::MediaStatement,
            NODE_NAMESPACE_STATEMENT => NodeKind::NamespaceStatement,
            NODE_SUPPORTS_STATEMENT => NodeKind::SupportsStatement,
            NODE_KEYFRAMES_STATEMENT => NodeKind::KeyframesStatement,
            NODE_KEYFRAMES_NAME => NodeKind::KeyframesName,
            NODE_KEYFRAME_BLOCK_LIST => NodeKind::KeyframeBlockList,
            NODE_KEYFRAME_BLOCK => NodeKind::KeyframeBlock,
            NODE_KEYWORD_QUERY | NODE_FEATURE_QUERY | NODE_FEATURE_NAME | NODE_BINARY_QUERY
            | NODE_UNARY_QUERY | NODE_SELECTOR_QUERY | NODE_PARENTHESIZED_QUERY => {
                NodeKind::Query
            }

            NODE_PLAIN_VALUE | NODE_STRING_VALUE | NODE_COLOR_VALUE | NODE_INTEGER_VALUE
            | NODE_FLOAT_VALUE | NODE_UNIT | NODE_BINARY_EXPRESSION
            | NODE_PARENTHESIZED_VALUE | NODE_GRID_VALUE => NodeKind::Value,
            NODE_CALL_EXPRESSION => NodeKind::CallExpression,
            NODE_FUNCTION_NAME => NodeKind::FunctionName,

            NODE_COMMENT | NODE_JS_COMMENT => NodeKind::Comment,
            NODE_ERROR => NodeKind::Error,
            _ => NodeKind::Unknown,
        }
    }

    /// Whether the node is a selector or a part of one that carries meaning
    /// on its own (combinators and compound parts included)
    pub fn is_selector(self) -> bool {
        matches!(
            self,
            NodeKind::TagName
                | NodeKind::UniversalSelector
                | NodeKind::NestingSelector
                | NodeKind::ClassSelector
                | NodeKind::IdSelector
                | NodeKind::AttributeSelector
                | NodeKind::PseudoClassSelector
                | NodeKind::PseudoElementSelector
                | NodeKind::DescendantSelector
                | NodeKind::ChildSelector
                | NodeKind::SiblingSelector
                | NodeKind::AdjacentSiblingSelector
                | NodeKind::NamespaceSelector
        )
    }

    /// Whether the node is one of the `@`-statements of the grammar
    pub fn is_at_statement(self) -> bool {
        matches!(
            self,
            NodeKind::AtRule
                | NodeKind::ImportStatement
                | NodeKind::CharsetStatement
                | NodeKind::MediaStatement
                | NodeKind::NamespaceStatement
                | NodeKind::SupportsStatement
                | NodeKind::KeyframesStatement
        )
    }
}
