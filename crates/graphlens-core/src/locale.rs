//! Bilingual entity-type lexicon.
//!
//! Maps canonical (source-language) type codes to localized display labels
//! and back. Two synchronized maps are built once from a fixed table, so
//! both lookup directions are O(1) and the table is read-only afterwards.
//!
//! The code set is open-ended: entity extraction upstream can emit types
//! this table has never seen. Direct lookups on unknown codes fail with
//! [`GraphError::UnknownType`], but display localization degrades to the
//! code itself so valid-but-untranslated data is never rejected.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::snapshot::GraphSnapshot;

/// Built-in translation table for entity-type codes.
///
/// Covers the categories the upstream extraction commonly emits. Not a
/// closed list; unseen codes pass through unlocalized.
const BUILTIN: &[(&str, &str)] = &[
    ("organization", "组织"),
    ("company", "公司"),
    ("department", "部门"),
    ("person", "人员"),
    ("position", "职位"),
    ("event", "事件"),
    ("location", "地点"),
    ("geo", "地理"),
    ("category", "类别"),
    ("product", "产品"),
    ("technology", "技术"),
    ("equipment", "设备"),
    ("document", "文档"),
    ("time", "时间"),
    ("unknown", "未知"),
];

/// Bidirectional code ↔ label lookup table.
#[derive(Debug, Clone)]
pub struct TypeLexicon {
    label_by_code: HashMap<String, String>,
    code_by_label: HashMap<String, String>,
}

impl Default for TypeLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeLexicon {
    /// Creates a lexicon with the built-in translation table.
    pub fn new() -> Self {
        Self::from_pairs(BUILTIN.iter().copied())
    }

    /// Creates a lexicon from an explicit code/label table.
    ///
    /// Later pairs override earlier ones for the same code.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut label_by_code = HashMap::new();
        let mut code_by_label = HashMap::new();
        for (code, label) in pairs {
            label_by_code.insert(code.to_string(), label.to_string());
            code_by_label.insert(label.to_string(), code.to_string());
        }
        Self {
            label_by_code,
            code_by_label,
        }
    }

    /// Looks up the localized label for a canonical type code.
    pub fn localize(&self, code: &str) -> Result<&str> {
        self.label_by_code
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| GraphError::UnknownType(code.to_string()))
    }

    /// Looks up the canonical code for a localized label.
    pub fn canonicalize(&self, label: &str) -> Result<&str> {
        self.code_by_label
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| GraphError::UnknownType(label.to_string()))
    }

    /// Localizes a code for display, falling back to the code itself when
    /// no translation exists. Total over any input.
    pub fn label_or_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.label_by_code
            .get(code)
            .map(String::as_str)
            .unwrap_or(code)
    }

    /// Whether the lexicon has a translation for this code.
    pub fn knows_code(&self, code: &str) -> bool {
        self.label_by_code.contains_key(code)
    }

    /// Counts how many snapshot entities carry a translatable type code.
    ///
    /// Returns `(translated, total)`.
    pub fn coverage(&self, snapshot: &GraphSnapshot) -> (usize, usize) {
        let translated = snapshot
            .entities()
            .filter(|e| self.knows_code(&e.type_code))
            .count();
        (translated, snapshot.entity_count())
    }

    /// Number of code/label pairs in the table.
    pub fn len(&self) -> usize {
        self.label_by_code.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.label_by_code.is_empty()
    }
}
