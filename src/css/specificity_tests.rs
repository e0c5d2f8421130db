use crate::css::classifier::{Subject, classify};
use crate::css::locator::locate;
use crate::css::parser::Dialect;
use crate::css::selector::{ComplexSelector, CompoundSelector, SimpleSelector};
use crate::css::specificity::*;
use crate::test_utils::{parse_document, split_cursor};

/// Analyze the selector under the `|` cursor
fn report(marked: &str, dialect: Dialect) -> SelectorReport {
    let (source, offset) = split_cursor(marked);
    let (_, tree) = parse_document(&source);
    let node = locate(tree.root_node(), offset).expect("Cursor should be inside the tree");
    match classify(node, &source) {
        Subject::Selector { selector } => analyze_selector(selector, &source, dialect),
        other => panic!("Expected a selector at the cursor, got {:?}", other),
    }
}

fn own(marked: &str) -> Specificity {
    report(marked, Dialect::Css).specificity
}

#[test]
fn test_display_and_order() {
    assert_eq!(Specificity::new(1, 2, 3).to_string(), "(1, 2, 3)");
    assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 10, 10));
    assert!(Specificity::new(0, 1, 0) > Specificity::new(0, 0, 99));
    assert_eq!(Specificity::ID + Specificity::CLASS, Specificity::new(1, 1, 0));
}

#[test]
fn test_simple_selectors() {
    assert_eq!(own("#na|v {}"), Specificity::new(1, 0, 0));
    assert_eq!(own(".it|em {}"), Specificity::new(0, 1, 0));
    assert_eq!(own("di|v {}"), Specificity::new(0, 0, 1));
    assert_eq!(own("|* {}"), Specificity::ZERO);
    assert_eq!(own("[ty|pe] {}"), Specificity::new(0, 1, 0));
}

#[test]
fn test_selector_sums_compounds() {
    assert_eq!(own("#nav .it|em {}"), Specificity::new(1, 1, 0));
    assert_eq!(own("#nav .item |a {}"), Specificity::new(1, 1, 1));
    assert_eq!(own("ul > li.ac|tive + li {}"), Specificity::new(0, 1, 3));
}

#[test]
fn test_compound_parts_after_combinators() {
    assert_eq!(own("#nav > .it|em:hover {}"), Specificity::new(1, 2, 0));
    assert_eq!(own("nav |a::after {}"), Specificity::new(0, 0, 3));
    assert_eq!(own("u|l li[title] {}"), Specificity::new(0, 1, 2));
    assert_eq!(own("a b:not(#|x) {}"), Specificity::new(1, 0, 2));
}

#[test]
fn test_pseudo_selectors() {
    assert_eq!(own("|a:hover {}"), Specificity::new(0, 1, 1));
    assert_eq!(own("|p::after {}"), Specificity::new(0, 0, 2));
    // Legacy single colon pseudo-elements weigh as elements
    assert_eq!(own("|p:before {}"), Specificity::new(0, 0, 2));
}

#[test]
fn test_selector_list_arguments_take_the_most_specific_branch() {
    assert_eq!(own(":is(#main, .b .|c) {}"), Specificity::new(1, 0, 0));
    assert_eq!(own(":not(.|a, .b.c) {}"), Specificity::new(0, 2, 0));
    assert_eq!(own("|p:not(.a) {}"), Specificity::new(0, 1, 1));
}

#[test]
fn test_where_weighs_nothing() {
    assert_eq!(own(":where(#main, .|b) {}"), Specificity::ZERO);
    assert_eq!(own(":where(#main) |a {}"), Specificity::new(0, 0, 1));
}

fn pseudo_class(name: &str, arguments: Vec<ComplexSelector>) -> Specificity {
    simple_specificity(&SimpleSelector::PseudoClass {
        name: name.to_string(),
        text: format!(":{name}"),
        arguments,
    })
}

#[test]
fn test_functional_pseudo_class_rules() {
    let class = ComplexSelector {
        first: CompoundSelector {
            simples: vec![SimpleSelector::Class("a".to_string())],
        },
        rest: Vec::new(),
    };

    assert_eq!(pseudo_class("nth-child", vec![]), Specificity::CLASS);
    assert_eq!(
        pseudo_class("nth-child", vec![class.clone()]),
        Specificity::new(0, 2, 0)
    );
    assert_eq!(pseudo_class("host", vec![class.clone()]), Specificity::new(0, 2, 0));
    // Without arguments `:is()` counts like any other pseudo-class
    assert_eq!(pseudo_class("is", vec![]), Specificity::CLASS);
    // Vendor prefixed forms follow the unprefixed rules
    assert_eq!(pseudo_class("-webkit-any", vec![class.clone()]), Specificity::CLASS);
    assert_eq!(pseudo_class("-moz-any", vec![ComplexSelector::default()]), Specificity::ZERO);
    assert_eq!(pseudo_class("hover", vec![class]), Specificity::CLASS);
}

#[test]
fn test_nesting_selector_weighs_nothing() {
    let report = report(".list { &.ac|tive {} }", Dialect::Scss);
    assert_eq!(report.specificity, Specificity::new(0, 1, 0));
    assert_eq!(report.cumulative, Specificity::new(0, 2, 0));
}

#[test]
fn test_nested_levels() {
    let report = report(".list { #nav { e|m {} } }", Dialect::Scss);
    assert_eq!(
        report.levels,
        vec![
            Specificity::new(0, 1, 0),
            Specificity::new(1, 0, 0),
            Specificity::new(0, 0, 1),
        ]
    );
    assert_eq!(report.specificity, Specificity::new(0, 0, 1));
    assert_eq!(report.cumulative, Specificity::new(1, 1, 1));
}

#[test]
fn test_nesting_matches_flattened_selector() {
    let nested = report(".list { #nav { e|m {} } }", Dialect::Scss);
    let flat = report(".list #nav e|m {}", Dialect::Css);
    assert_eq!(nested.cumulative, flat.specificity);
    assert_eq!(
        nested.cumulative,
        nested.levels.iter().copied().sum::<Specificity>()
    );
}

#[test]
fn test_nesting_uses_first_selector_of_each_rule() {
    let report = report("#nav, .list { d|iv {} }", Dialect::Scss);
    assert_eq!(report.levels[0], Specificity::new(1, 0, 0));
}

#[test]
fn test_nesting_through_at_rules() {
    let report = report(".list { @media print { e|m {} } }", Dialect::Scss);
    assert_eq!(report.levels.len(), 2);
    assert_eq!(report.cumulative, Specificity::new(0, 1, 1));
}

#[test]
fn test_at_root_ends_nesting_in_scss() {
    let scss = report(".list { @at-root { .it|em {} } }", Dialect::Scss);
    assert_eq!(scss.levels, vec![Specificity::new(0, 1, 0)]);
    assert_eq!(scss.preview, "<element class=\"item\">");

    // Plain CSS has no such directive, nesting continues
    let css = report(".list { @at-root { .it|em {} } }", Dialect::Css);
    assert_eq!(css.levels.len(), 2);
}

#[test]
fn test_top_level_selector_has_single_level() {
    let report = report(".f|oo {}", Dialect::Css);
    assert_eq!(report.levels, vec![Specificity::CLASS]);
    assert_eq!(report.cumulative, report.specificity);
    assert_eq!(report.preview, "<element class=\"foo\">");
}
