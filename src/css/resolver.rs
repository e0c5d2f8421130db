//! Documentation resolver
//!
//! Looks up reference documentation for the construct under the cursor.

use crate::css::classifier::Subject;
use crate::css::constants::VENDOR_PREFIXES;
use crate::css::data::{CssDataset, DataEntry, EntryKind};

/// Dataset kind a subject is documented under, `None` for subjects without documentation
pub fn entry_kind(subject: &Subject) -> Option<EntryKind> {
    match subject {
        Subject::PropertyName { .. } | Subject::PropertyValueTerm { .. } => {
            Some(EntryKind::Property)
        }
        Subject::PseudoClass { .. } => Some(EntryKind::PseudoClass),
        Subject::PseudoElement { .. } => Some(EntryKind::PseudoElement),
        Subject::AtRuleKeyword { .. } => Some(EntryKind::AtRule),
        Subject::Selector { .. } | Subject::Unsupported { .. } => None,
    }
}

/// Lowercase name without colons, `@` and old IE hack prefixes (`*zoom`, `_height`)
pub fn canonical_name(name: &str) -> String {
    name.trim()
        .trim_start_matches([':', '@'])
        .trim_start_matches(['*', '_'])
        .to_ascii_lowercase()
}

/// Name without its vendor prefix, `None` if it has none
pub fn strip_vendor_prefix(name: &str) -> Option<&str> {
    VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .filter(|base| !base.is_empty())
}

/// Find the documentation for a name
///
/// The exact name is tried first so vendor specific entries such as
/// `::-webkit-scrollbar` keep their own documentation, then the name without
/// its vendor prefix.
pub fn resolve<'d>(dataset: &'d CssDataset, kind: EntryKind, name: &str) -> Option<&'d DataEntry> {
    let canonical = canonical_name(name);
    if canonical.is_empty() {
        return None;
    }

    dataset.get(kind, &canonical).or_else(|| {
        strip_vendor_prefix(&canonical).and_then(|base| dataset.get(kind, base))
    })
}
