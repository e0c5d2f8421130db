//! CSS Tree-sitter Node Kind Constants
//!
//! This module contains the tree-sitter-css node kinds and the fixed strings used
//! by the hover engine. Centralizing these constants helps prevent mistakes and
//! makes the code more maintainable.

// Basic structural nodes
/// Root node of the CSS syntax tree
pub const NODE_STYLESHEET: &str = "stylesheet";
/// A CSS rule containing selectors and a declaration block
pub const NODE_RULE_SET: &str = "rule_set";
/// A block of declarations and nested rules enclosed in curly braces
pub const NODE_BLOCK: &str = "block";
/// A single property-value pair (e.g., `color: red;`)
pub const NODE_DECLARATION: &str = "declaration";
/// Container for one or more comma separated selectors
pub const NODE_SELECTORS: &str = "selectors";

// Property and value nodes
/// CSS property name (e.g., `color`, `-webkit-transition`)
pub const NODE_PROPERTY_NAME: &str = "property_name";
/// `!important` flag of a declaration
pub const NODE_IMPORTANT: &str = "important";
/// Plain text value without quotes (e.g., `red`, `bold`)
pub const NODE_PLAIN_VALUE: &str = "plain_value";
/// Quoted string value (e.g., `"Arial"`, `'bold'`)
pub const NODE_STRING_VALUE: &str = "string_value";
/// Hex color value (e.g., `#ff0000`)
pub const NODE_COLOR_VALUE: &str = "color_value";
/// Integer numeric value (e.g., `10`, `100`)
pub const NODE_INTEGER_VALUE: &str = "integer_value";
/// Floating-point numeric value (e.g., `1.5`, `0.75`)
pub const NODE_FLOAT_VALUE: &str = "float_value";
/// CSS unit identifier (e.g., `px`, `%`, `em`)
pub const NODE_UNIT: &str = "unit";
/// Arithmetic inside a value (e.g., inside `calc()`)
pub const NODE_BINARY_EXPRESSION: &str = "binary_expression";
/// Parenthesized value
pub const NODE_PARENTHESIZED_VALUE: &str = "parenthesized_value";
/// Grid template value (e.g., `[full-start]`)
pub const NODE_GRID_VALUE: &str = "grid_value";

// Function calls
/// CSS function call (e.g., `rgb()`, `url()`)
pub const NODE_CALL_EXPRESSION: &str = "call_expression";
/// Name of a CSS function (e.g., `rgb`, `url`)
pub const NODE_FUNCTION_NAME: &str = "function_name";
/// Arguments of a function call or of a functional pseudo selector
pub const NODE_ARGUMENTS: &str = "arguments";

// Selector types
/// Element type selector (e.g., `div`), also the name of a pseudo-element
pub const NODE_TAG_NAME: &str = "tag_name";
/// Universal selector `*`
pub const NODE_UNIVERSAL_SELECTOR: &str = "universal_selector";
/// Nesting selector `&`
pub const NODE_NESTING_SELECTOR: &str = "nesting_selector";
/// CSS class selector (e.g., `.my-class`)
pub const NODE_CLASS_SELECTOR: &str = "class_selector";
/// Name part of a class selector, also the name of a pseudo-class
pub const NODE_CLASS_NAME: &str = "class_name";
/// Name fragment, the children of a class name (e.g., `foo` in `.foo`)
pub const NODE_IDENTIFIER: &str = "identifier";
/// Escaped character inside a name or string (e.g., `\:` in `.sm\:flex`)
pub const NODE_ESCAPE_SEQUENCE: &str = "escape_sequence";
/// CSS ID selector (e.g., `#my-id`)
pub const NODE_ID_SELECTOR: &str = "id_selector";
/// Name part of an ID selector (e.g., `my-id` in `#my-id`)
pub const NODE_ID_NAME: &str = "id_name";
/// Attribute selector (e.g., `[type="text"]`)
pub const NODE_ATTRIBUTE_SELECTOR: &str = "attribute_selector";
/// Name part of an attribute selector
pub const NODE_ATTRIBUTE_NAME: &str = "attribute_name";
/// CSS pseudo-class selector (e.g., `:hover`, `:not(.a)`)
pub const NODE_PSEUDO_CLASS_SELECTOR: &str = "pseudo_class_selector";
/// CSS pseudo-element selector (e.g., `::after`)
pub const NODE_PSEUDO_ELEMENT_SELECTOR: &str = "pseudo_element_selector";
/// Descendant combinator (whitespace)
pub const NODE_DESCENDANT_SELECTOR: &str = "descendant_selector";
/// Child combinator `>`
pub const NODE_CHILD_SELECTOR: &str = "child_selector";
/// Subsequent-sibling combinator `~`
pub const NODE_SIBLING_SELECTOR: &str = "sibling_selector";
/// Next-sibling combinator `+`
pub const NODE_ADJACENT_SIBLING_SELECTOR: &str = "adjacent_sibling_selector";
/// Namespaced type selector (e.g., `svg|rect`)
pub const NODE_NAMESPACE_SELECTOR: &str = "namespace_selector";
/// Namespace prefix of a namespaced selector
pub const NODE_NAMESPACE_NAME: &str = "namespace_name";

// At-rules
/// Generic CSS at-rule (e.g., `@font-face`, `@at-root`)
pub const NODE_AT_RULE: &str = "at_rule";
/// Keyword of a generic at-rule (e.g., `@font-face`)
pub const NODE_AT_KEYWORD: &str = "at_keyword";
/// CSS import statement for external stylesheets
pub const NODE_IMPORT_STATEMENT: &str = "import_statement";
/// CSS charset declaration statement
pub const NODE_CHARSET_STATEMENT: &str = "charset_statement";
/// CSS keyframes animation definition
pub const NODE_KEYFRAMES_STATEMENT: &str = "keyframes_statement";
/// Name of a keyframes animation
pub const NODE_KEYFRAMES_NAME: &str = "keyframes_name";
/// Block of keyframes
pub const NODE_KEYFRAME_BLOCK_LIST: &str = "keyframe_block_list";
/// A single keyframe (e.g., `from { ... }`)
pub const NODE_KEYFRAME_BLOCK: &str = "keyframe_block";
/// CSS media query statement
pub const NODE_MEDIA_STATEMENT: &str = "media_statement";
/// CSS namespace declaration statement
pub const NODE_NAMESPACE_STATEMENT: &str = "namespace_statement";
/// CSS feature query statement
pub const NODE_SUPPORTS_STATEMENT: &str = "supports_statement";

// Queries of media and supports statements
pub const NODE_KEYWORD_QUERY: &str = "keyword_query";
pub const NODE_FEATURE_QUERY: &str = "feature_query";
pub const NODE_FEATURE_NAME: &str = "feature_name";
pub const NODE_BINARY_QUERY: &str = "binary_query";
pub const NODE_UNARY_QUERY: &str = "unary_query";
pub const NODE_SELECTOR_QUERY: &str = "selector_query";
pub const NODE_PARENTHESIZED_QUERY: &str = "parenthesized_query";

// Comments
/// CSS comment block (e.g., `/* comment */`)
pub const NODE_COMMENT: &str = "comment";
/// Line comment used by preprocessor dialects (e.g., `// comment`)
pub const NODE_JS_COMMENT: &str = "js_comment";

// Error and special nodes
/// Tree-sitter error node for syntax errors
pub const NODE_ERROR: &str = "ERROR";

// Selector markers
/// Marker token in front of a class name
pub const TOKEN_CLASS_MARKER: &str = ".";
/// Marker token in front of an id name
pub const TOKEN_ID_MARKER: &str = "#";
/// Marker token in front of a pseudo-class name
pub const TOKEN_PSEUDO_CLASS_MARKER: &str = ":";
/// Marker token in front of a pseudo-element name
pub const TOKEN_PSEUDO_ELEMENT_MARKER: &str = "::";

/// SCSS directive that moves its rules back to the document root
pub const AT_ROOT: &str = "at-root";

/// Pseudo-elements that CSS2 allowed to be written with a single colon
pub const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["before", "after", "first-line", "first-letter"];

/// Vendor prefixes stripped before a documentation lookup
pub const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];

// Hover text
/// Reference page about selector specificity
pub const SPECIFICITY_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/CSS/Specificity";
/// Label of the specificity line
pub const SPECIFICITY_LABEL: &str = "Selector Specificity";
/// Language tag of the selector preview block
pub const PREVIEW_LANGUAGE: &str = "html";
/// Label inserted between an element and a descendant
pub const DESCENDANT_LABEL: &str = "\u{2026}";
/// Label inserted in front of a subsequent sibling
pub const SIBLING_LABEL: &str = "\u{22EE}";
