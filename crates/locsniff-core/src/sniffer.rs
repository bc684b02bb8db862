// crates/locsniff-core/src/sniffer.rs

//! The engine: normalization, tiered dictionary probing, optional caching.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alias::AliasTable;
use crate::catalog::Catalog;
use crate::dictionary::{DictionaryEntry, LocationDictionary};
use crate::model::RecordKind;
use crate::normalize::normalize;

/// The answer to one query.
///
/// `matches` holds zero or one entries today; the `Vec` shape is deliberate
/// so multi-match support would not be a breaking change. An empty result
/// means "well-formed but unrecognized", never a fault.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchResult {
    pub query: String,
    pub matches: Vec<DictionaryEntry>,
}

impl MatchResult {
    fn empty(query: &str) -> Self {
        MatchResult {
            query: query.to_string(),
            matches: Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        !self.matches.is_empty()
    }

    /// The single match, if any.
    pub fn best(&self) -> Option<&DictionaryEntry> {
        self.matches.first()
    }
}

/// Capability interface for an externally supplied lookup cache.
///
/// Keys are the *raw* input strings; cached negatives short-circuit too.
/// The engine imposes no eviction or TTL policy — that is entirely the
/// collaborator's business. Implementations must tolerate concurrent
/// get/put, hence the `&self` methods.
pub trait MatchCache: Send + Sync {
    fn get(&self, key: &str) -> Option<MatchResult>;
    fn put(&self, key: &str, result: &MatchResult);
}

/// Unbounded in-process cache; the reference [`MatchCache`] implementation.
#[derive(Default)]
pub struct MemoryCache {
    inner: Mutex<HashMap<String, MatchResult>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchCache for MemoryCache {
    fn get(&self, key: &str) -> Option<MatchResult> {
        self.inner.lock().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, result: &MatchResult) {
        if let Ok(mut map) = self.inner.lock() {
            map.insert(key.to_string(), result.clone());
        }
    }
}

/// Engine statistics: catalog record counts and dictionary key counts.
///
/// Requesting stats forces the dictionary build.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SnifferStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
    pub country_keys: usize,
    pub state_keys: usize,
    pub city_keys: usize,
}

/// The location recognition engine.
///
/// Explicitly constructed from a catalog and an alias table; the dictionary
/// is built lazily behind a [`OnceCell`] on first query (or eagerly via
/// [`Sniffer::build_dictionary`]), after which the engine is read-only and
/// safe to share across threads.
pub struct Sniffer {
    catalog: Catalog,
    aliases: AliasTable,
    dict: OnceCell<LocationDictionary>,
    cache: Option<Box<dyn MatchCache>>,
}

impl std::fmt::Debug for Sniffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sniffer").finish_non_exhaustive()
    }
}

impl Sniffer {
    pub fn new(catalog: Catalog, aliases: AliasTable) -> Self {
        Sniffer {
            catalog,
            aliases,
            dict: OnceCell::new(),
            cache: None,
        }
    }

    /// Attach a lookup cache. Without one, every call performs the full
    /// normalize-and-probe sequence.
    pub fn with_cache(mut self, cache: Box<dyn MatchCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Build the dictionary now instead of on first query. Idempotent;
    /// concurrent first calls race safely on the cell.
    pub fn build_dictionary(&self) -> &LocationDictionary {
        self.dict
            .get_or_init(|| LocationDictionary::build(&self.catalog))
    }

    /// Identify the location a free-text string refers to.
    ///
    /// The normalized query is probed against the country, state, and city
    /// tiers in that fixed order; the first tier that knows the key wins and
    /// the rest are not consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use locsniff_core::{AliasTable, Catalog, CatalogConfig, Sniffer};
    ///
    /// let rows = vec![serde_json::json!({
    ///     "cityName": "Paris", "countryName": "France",
    ///     "countryAbbr2": "fr", "countryAbbr3": "fra",
    ///     "population": 2000000
    /// })];
    /// let (catalog, _report) = Catalog::from_raw(rows, &CatalogConfig::default());
    /// let sniffer = Sniffer::new(catalog, AliasTable::new());
    ///
    /// let result = sniffer.sniff("  PARIS ,  France ");
    /// assert_eq!(result.best().unwrap().output, "Paris, France");
    /// ```
    pub fn sniff(&self, raw: &str) -> MatchResult {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(raw) {
                debug!(query = raw, "cache hit");
                return hit;
            }
        }

        let key = normalize(raw, &self.aliases);
        let dict = self.build_dictionary();

        let entry = dict
            .probe(RecordKind::Country, &key)
            .or_else(|| dict.probe(RecordKind::State, &key))
            .or_else(|| dict.probe(RecordKind::City, &key));

        let result = match entry {
            Some(entry) => MatchResult {
                query: raw.to_string(),
                matches: vec![DictionaryEntry::clone(entry)],
            },
            None => MatchResult::empty(raw),
        };

        if let Some(cache) = &self.cache {
            cache.put(raw, &result);
        }
        result
    }

    pub fn stats(&self) -> SnifferStats {
        let dict = self.build_dictionary();
        SnifferStats {
            countries: self.catalog.countries().len(),
            states: self.catalog.states().len(),
            cities: self.catalog.cities().len(),
            country_keys: dict.len(RecordKind::Country),
            state_keys: dict.len(RecordKind::State),
            city_keys: dict.len(RecordKind::City),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogConfig;

    fn engine() -> Sniffer {
        let rows = vec![
            serde_json::json!({
                "cityName": "Paris", "countryName": "France",
                "countryAbbr2": "fr", "countryAbbr3": "fra",
                "population": 2148000
            }),
            serde_json::json!({
                "cityName": "Georgia", "stateName": "Vermont", "stateAbbr": "VT",
                "countryName": "United States", "countryAbbr2": "us", "countryAbbr3": "usa",
                "population": 51000
            }),
        ];
        let (catalog, _) = Catalog::from_raw(rows, &CatalogConfig::default());
        Sniffer::new(catalog, AliasTable::new())
    }

    #[test]
    fn probes_city_tier_last() {
        let e = engine();
        assert_eq!(e.sniff("france").best().unwrap().kind, RecordKind::Country);
        assert_eq!(e.sniff("vermont").best().unwrap().kind, RecordKind::State);
        let city = e.sniff("georgia, vermont");
        assert_eq!(city.best().unwrap().kind, RecordKind::City);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let result = engine().sniff("Qwxzplonk Nonexistentia");
        assert!(result.matches.is_empty());
        assert_eq!(result.query, "Qwxzplonk Nonexistentia");
    }

    #[test]
    fn memory_cache_round_trips_negatives() {
        let cache = MemoryCache::new();
        let miss = MatchResult::empty("nowhere");
        cache.put("nowhere", &miss);
        let hit = cache.get("nowhere").unwrap();
        assert!(hit.matches.is_empty());
    }

    #[test]
    fn stats_counts_catalog_and_keys() {
        let stats = engine().stats();
        assert_eq!(stats.countries, 2);
        assert_eq!(stats.cities, 2);
        assert!(stats.city_keys > 0);
        assert!(stats.country_keys >= 4); // fr, fra, france + us codes
    }
}
