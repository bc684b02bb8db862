// crates/locsniff-core/src/alias.rs

//! Casual-name → canonical-name substitution ("nyc" → "new york city").
//!
//! Aliases are applied during query normalization only; dictionary keys are
//! generated from canonical record fields and never pass through here.

use indexmap::IndexMap;
use regex::{NoExpand, Regex};

use crate::error::{Result, SniffError};

/// An ordered alias table.
///
/// Keys match as case-insensitive whole words anywhere in the query and are
/// replaced by their value. Application order is definition order — the
/// backing map is an [`IndexMap`], so a table loaded from the same source
/// always rewrites a query the same way.
#[derive(Debug, Default)]
pub struct AliasTable {
    entries: IndexMap<String, String>,
    patterns: Vec<(Regex, String)>,
}

impl AliasTable {
    /// An empty table (every query passes through unchanged).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(alias, canonical)` pairs, preserving their order.
    ///
    /// Duplicate alias keys keep the first definition.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (k, v) in pairs {
            entries.entry(k.into()).or_insert_with(|| v.into());
        }
        Self::from_map(entries)
    }

    pub fn from_map(entries: IndexMap<String, String>) -> Result<Self> {
        let mut patterns = Vec::with_capacity(entries.len());
        for (alias, canonical) in &entries {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(alias));
            let re = Regex::new(&pattern)
                .map_err(|e| SniffError::InvalidData(format!("alias {alias:?}: {e}")))?;
            patterns.push((re, canonical.clone()));
        }
        Ok(AliasTable { entries, patterns })
    }

    /// Rewrite every alias occurrence in `s`. Multiple aliases may fire on
    /// one string; replacement text is taken literally.
    pub fn apply(&self, s: &str) -> String {
        let mut out = s.to_string();
        for (re, canonical) in &self.patterns {
            if re.is_match(&out) {
                out = re.replace_all(&out, NoExpand(canonical)).into_owned();
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
