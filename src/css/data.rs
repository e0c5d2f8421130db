//! CSS Reference Data
//!
//! Documentation for properties, pseudo-classes, pseudo-elements and at-rules,
//! read from JSON in the custom data format editors use for CSS. A builtin dataset
//! is embedded into the binary; custom data files can be merged on top of it.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{HoverError, HoverResult, IoContext, JsonContext};

const BUILTIN_DATA: &str = include_str!("../../data/css_data.json");

/// Link to further documentation about an entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub name: String,
    pub url: String,
}

/// Standardization status of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Standard,
    Experimental,
    Nonstandard,
    Obsolete,
}

/// A documented construct
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataEntry {
    /// Name as written in CSS, e.g. `color`, `:hover`, `::after`, `@media`
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Value grammar, properties only
    #[serde(default)]
    pub syntax: Option<String>,
    #[serde(default)]
    pub status: Option<EntryStatus>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// What kind of construct an entry documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Property,
    PseudoClass,
    PseudoElement,
    AtRule,
}

/// Layout of a data file
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CssDataFile {
    #[serde(default)]
    properties: Vec<DataEntry>,
    #[serde(default)]
    pseudo_classes: Vec<DataEntry>,
    #[serde(default)]
    pseudo_elements: Vec<DataEntry>,
    #[serde(default)]
    at_directives: Vec<DataEntry>,
}

/// Documentation entries keyed by kind and lowercase name without `:`/`@` prefix
#[derive(Debug, Clone, Default)]
pub struct CssDataset {
    entries: HashMap<(EntryKind, String), DataEntry>,
}

impl CssDataset {
    /// The dataset embedded into the binary, parsed on first use
    pub fn builtin() -> &'static CssDataset {
        static BUILTIN: OnceLock<CssDataset> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            CssDataset::from_json(BUILTIN_DATA).unwrap_or_else(|e| {
                log::error!("Builtin CSS data is invalid: {}", e);
                CssDataset::default()
            })
        })
    }

    /// Parse a dataset from JSON
    pub fn from_json(json: &str) -> HoverResult<Self> {
        let file: CssDataFile =
            serde_json::from_str(json).with_json_context("Failed to parse CSS data")?;

        let mut dataset = Self::default();
        let groups = [
            (EntryKind::Property, file.properties),
            (EntryKind::PseudoClass, file.pseudo_classes),
            (EntryKind::PseudoElement, file.pseudo_elements),
            (EntryKind::AtRule, file.at_directives),
        ];
        for (kind, entries) in groups {
            for entry in entries {
                dataset.insert(kind, entry);
            }
        }
        Ok(dataset)
    }

    /// Read a custom data file
    pub fn from_file(path: &Path) -> HoverResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_io_context(&format!("Failed to read custom data {}", path.display()))?;
        Self::from_json(&json).map_err(|e| HoverError::CustomData {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The builtin dataset extended by custom data files
    ///
    /// Files that cannot be read are skipped with a warning, later files override
    /// entries of earlier ones.
    pub fn with_custom_data<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut dataset = Self::builtin().clone();
        for path in paths {
            match Self::from_file(path.as_ref()) {
                Ok(custom) => dataset.merge(custom),
                Err(e) => log::warn!("Ignoring custom data: {}", e),
            }
        }
        dataset
    }

    /// Add the entries of another dataset, replacing entries with the same name
    pub fn merge(&mut self, other: CssDataset) {
        self.entries.extend(other.entries);
    }

    /// Look up an entry by kind and canonical name
    pub fn get(&self, kind: EntryKind, name: &str) -> Option<&DataEntry> {
        self.entries.get(&(kind, name.to_string()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, kind: EntryKind, entry: DataEntry) {
        let key = entry
            .name
            .trim_start_matches([':', '@'])
            .to_ascii_lowercase();
        self.entries.insert((kind, key), entry);
    }
}
