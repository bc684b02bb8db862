// crates/locsniff-core/src/dictionary.rs

//! The three-tier lookup dictionary built from the catalog by template
//! expansion.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::model::RecordKind;
use crate::pattern::{output_template, render, templates, SEPARATORS};
use crate::text::fold_key;

/// One recognizable string's worth of match data.
///
/// Field values are stored in template order under their bare names
/// (`cityName`, `countryAbbr2`, ...); `output` is the human-readable
/// rendering chosen for the record's country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub kind: RecordKind,
    pub fields: IndexMap<String, String>,
    pub template: String,
    pub output: String,
}

impl DictionaryEntry {
    /// A field value by its bare name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Canonicalized string → entry, one map per tier.
///
/// Built exactly once per engine and never mutated afterwards; the maps are
/// then safe to share across any number of readers. A key is registered in
/// both its lowercased and its diacritic-folded spelling, pointing at the
/// same shared entry.
#[derive(Debug, Default)]
pub struct LocationDictionary {
    countries: HashMap<String, Arc<DictionaryEntry>>,
    states: HashMap<String, Arc<DictionaryEntry>>,
    cities: HashMap<String, Arc<DictionaryEntry>>,
}

impl LocationDictionary {
    /// Expand every catalog record into its dictionary entries.
    ///
    /// Catalog order matters: with first-writer-wins insertion, earlier
    /// records (higher population, capitals) own ambiguous keys.
    pub fn build(catalog: &Catalog) -> Self {
        let mut dict = LocationDictionary::default();
        for country in catalog.countries() {
            dict.expand(RecordKind::Country, &country.pairs());
        }
        for state in catalog.states() {
            dict.expand(RecordKind::State, &state.pairs());
        }
        for city in catalog.cities() {
            dict.expand(RecordKind::City, &city.pairs());
            if let Some(latin) = city.latin_pairs() {
                dict.expand(RecordKind::City, &latin);
            }
        }
        info!(
            countries = dict.countries.len(),
            states = dict.states.len(),
            cities = dict.cities.len(),
            "location dictionary built"
        );
        dict
    }

    /// Instantiate every template of `kind` with `pairs`, once per
    /// separator, inserting each rendering under its lowercased and folded
    /// keys. Templates referencing a field absent from `pairs` are skipped.
    fn expand(&mut self, kind: RecordKind, pairs: &[(&str, &str)]) {
        let abbr2 = pairs
            .iter()
            .find(|(name, _)| *name == "abbr2" || *name == "countryAbbr2")
            .map(|(_, value)| *value);
        let out_template = output_template(kind, abbr2);

        for template in templates(kind) {
            for sep in SEPARATORS {
                let mut with_sep = Vec::with_capacity(pairs.len() + 1);
                with_sep.extend_from_slice(pairs);
                with_sep.push(("sep", sep));

                let Some(candidate) = render(template, &with_sep) else {
                    // Missing field; no separator will change that.
                    break;
                };
                let key = candidate.to_lowercase();
                if self.tier(kind).contains_key(&key) {
                    debug!(kind = ?kind, %key, "duplicate dictionary key dropped");
                    continue;
                }
                // An override may reference a field this record lacks;
                // fall back to the kind default rather than dropping the key.
                let Some(output) = render(out_template, &with_sep)
                    .or_else(|| render(output_template(kind, None), &with_sep))
                else {
                    break;
                };
                let entry = Arc::new(DictionaryEntry {
                    kind,
                    fields: pairs
                        .iter()
                        .map(|(name, value)| (name.to_string(), value.to_string()))
                        .collect(),
                    template: template.to_string(),
                    output,
                });
                let folded = fold_key(&candidate);
                let tier = self.tier_mut(kind);
                tier.insert(key, Arc::clone(&entry));
                // First-writer-wins also applies to the folded spelling.
                tier.entry(folded).or_insert(entry);
            }
        }
    }

    /// Look up a normalized key, retrying its folded spelling on a miss.
    pub fn probe(&self, kind: RecordKind, key: &str) -> Option<&Arc<DictionaryEntry>> {
        let tier = self.tier(kind);
        tier.get(key).or_else(|| tier.get(&fold_key(key)))
    }

    pub fn len(&self, kind: RecordKind) -> usize {
        self.tier(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.states.is_empty() && self.cities.is_empty()
    }

    fn tier(&self, kind: RecordKind) -> &HashMap<String, Arc<DictionaryEntry>> {
        match kind {
            RecordKind::Country => &self.countries,
            RecordKind::State => &self.states,
            RecordKind::City => &self.cities,
        }
    }

    fn tier_mut(&mut self, kind: RecordKind) -> &mut HashMap<String, Arc<DictionaryEntry>> {
        match kind {
            RecordKind::Country => &mut self.countries,
            RecordKind::State => &mut self.states,
            RecordKind::City => &mut self.cities,
        }
    }
}
