// crates/locsniff-core/src/catalog.rs

//! The filtered, ordered, de-duplicated in-memory view of the dataset.
//!
//! Catalog ordering is load-bearing: dictionary insertion is
//! first-writer-wins, so the population-descending city order decides which
//! record owns an ambiguous short-form key ("paris" resolves to the biggest
//! Paris, not the first one in file order).

use std::cmp::Reverse;
use std::collections::HashSet;

use tracing::debug;

use crate::model::{CityRecord, CountryRecord, RawCityRecord, StateRecord};

/// Catalog construction knobs.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// A non-capital city is retained only when its population is known and
    /// at least this large.
    pub min_population: u64,
    /// City names (case-insensitive) kept regardless of population —
    /// a policy escape hatch for notable low-population places.
    pub always_keep: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            min_population: 50_000,
            always_keep: Vec::new(),
        }
    }
}

impl CatalogConfig {
    fn keeps_name(&self, name: &str) -> bool {
        self.always_keep.iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}

/// Row-level diagnostics from a catalog build.
///
/// `skipped` counts malformed rows (missing identity fields, unparsable
/// population); `reasons` carries one message per skipped row. Filtering a
/// well-formed row out by policy is not a skip.
#[derive(Clone, Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    pub reasons: Vec<String>,
}

/// De-duplicated, ordered country/state/city record sequences.
///
/// Built once and read-only afterwards. States and countries are projections
/// of the retained city list, so a state or country with no qualifying city
/// does not appear at all.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    countries: Vec<CountryRecord>,
    states: Vec<StateRecord>,
    cities: Vec<CityRecord>,
}

impl Catalog {
    /// Build a catalog from raw JSON rows, skipping (and counting) rows
    /// that fail conversion or validation.
    pub fn from_raw(
        rows: Vec<serde_json::Value>,
        config: &CatalogConfig,
    ) -> (Catalog, LoadReport) {
        let mut report = LoadReport::default();
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            let raw: RawCityRecord = match serde_json::from_value(row) {
                Ok(raw) => raw,
                Err(e) => {
                    debug!(row = index, error = %e, "skipping malformed dataset row");
                    report.skipped += 1;
                    report.reasons.push(format!("row {index}: {e}"));
                    continue;
                }
            };
            if let Err(reason) = raw.validate() {
                debug!(row = index, %reason, "skipping malformed dataset row");
                report.skipped += 1;
                report.reasons.push(format!("row {index}: {reason}"));
                continue;
            }
            records.push(raw);
        }
        let catalog = Self::from_records(records, config);
        report.loaded = catalog.cities.len();
        (catalog, report)
    }

    /// Build a catalog from already-validated records.
    ///
    /// Retention: capitals always stay; other cities need a known population
    /// at or above the threshold, or a spot on the keep-list.
    pub fn from_records(records: Vec<RawCityRecord>, config: &CatalogConfig) -> Catalog {
        let mut cities: Vec<CityRecord> = records
            .into_iter()
            .filter(|r| {
                r.is_capital()
                    || r.population.is_some_and(|p| p >= config.min_population)
                    || config.keeps_name(&r.city_name)
            })
            .map(CityRecord::from)
            .collect();

        // Stable: equal/unknown populations keep their source order.
        cities.sort_by_key(|c| Reverse(c.population.unwrap_or(0)));

        let mut states = Vec::new();
        let mut seen_states = HashSet::new();
        let mut countries = Vec::new();
        let mut seen_countries = HashSet::new();

        for city in &cities {
            let country_key = city.country_abbr2.to_lowercase();
            if seen_countries.insert(country_key) {
                countries.push(CountryRecord {
                    name: city.country_name.clone(),
                    abbr2: city.country_abbr2.clone(),
                    abbr3: city.country_abbr3.clone(),
                });
            }
            if let Some(state_name) = &city.state_name {
                let state_key = (
                    city.country_abbr2.to_lowercase(),
                    state_name.to_lowercase(),
                );
                if seen_states.insert(state_key) {
                    states.push(StateRecord {
                        country_name: city.country_name.clone(),
                        country_abbr2: city.country_abbr2.clone(),
                        country_abbr3: city.country_abbr3.clone(),
                        state_name: state_name.clone(),
                        state_abbr: city.state_abbr.clone(),
                    });
                }
            }
        }

        Catalog {
            countries,
            states,
            cities,
        }
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: serde_json::Value) -> RawCityRecord {
        serde_json::from_value(json).unwrap()
    }

    fn sample() -> Vec<RawCityRecord> {
        vec![
            raw(serde_json::json!({
                "cityName": "Springfield", "stateName": "Ohio", "stateAbbr": "OH",
                "countryName": "United States", "countryAbbr2": "us", "countryAbbr3": "usa",
                "population": 58000
            })),
            raw(serde_json::json!({
                "cityName": "Springfield", "stateName": "Missouri", "stateAbbr": "MO",
                "countryName": "United States", "countryAbbr2": "us", "countryAbbr3": "usa",
                "population": 169000
            })),
            raw(serde_json::json!({
                "cityName": "Tinytown", "stateName": "Missouri", "stateAbbr": "MO",
                "countryName": "United States", "countryAbbr2": "us", "countryAbbr3": "usa",
                "population": 400
            })),
            raw(serde_json::json!({
                "cityName": "Ottawa", "stateName": "Ontario", "stateAbbr": "ON",
                "countryName": "Canada", "countryAbbr2": "ca", "countryAbbr3": "can",
                "countryCapital": true
            })),
        ]
    }

    #[test]
    fn filters_below_threshold_keeps_capitals() {
        let catalog = Catalog::from_records(sample(), &CatalogConfig::default());
        let names: Vec<&str> = catalog.cities().iter().map(|c| c.city_name.as_str()).collect();
        assert!(names.contains(&"Ottawa"), "capital without population kept");
        assert!(!names.contains(&"Tinytown"));
    }

    #[test]
    fn keep_list_overrides_threshold() {
        let config = CatalogConfig {
            always_keep: vec!["tinytown".into()],
            ..CatalogConfig::default()
        };
        let catalog = Catalog::from_records(sample(), &config);
        assert!(catalog.cities().iter().any(|c| c.city_name == "Tinytown"));
    }

    #[test]
    fn cities_ordered_by_population_desc() {
        let catalog = Catalog::from_records(sample(), &CatalogConfig::default());
        let pops: Vec<Option<u64>> = catalog.cities().iter().map(|c| c.population).collect();
        assert_eq!(pops, vec![Some(169_000), Some(58_000), None]);
    }

    #[test]
    fn projections_dedup_in_city_order() {
        let catalog = Catalog::from_records(sample(), &CatalogConfig::default());
        let states: Vec<&str> = catalog.states().iter().map(|s| s.state_name.as_str()).collect();
        assert_eq!(states, vec!["Missouri", "Ohio", "Ontario"]);
        let countries: Vec<&str> = catalog.countries().iter().map(|c| c.abbr2.as_str()).collect();
        assert_eq!(countries, vec!["us", "ca"]);
    }

    #[test]
    fn from_raw_skips_and_reports_bad_rows() {
        let rows = vec![
            serde_json::json!({
                "cityName": "Paris", "countryName": "France",
                "countryAbbr2": "fr", "countryAbbr3": "fra", "population": 2000000
            }),
            serde_json::json!({ "cityName": "Nowhere" }),
            serde_json::json!({
                "cityName": "", "countryName": "France",
                "countryAbbr2": "fr", "countryAbbr3": "fra", "population": 1
            }),
        ];
        let (catalog, report) = Catalog::from_raw(rows, &CatalogConfig::default());
        assert_eq!(catalog.cities().len(), 1);
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.reasons.len(), 2);
    }

    #[test]
    fn states_without_surviving_city_are_absent() {
        // Ohio's only city falls below a raised threshold, so Ohio vanishes.
        let config = CatalogConfig {
            min_population: 100_000,
            ..CatalogConfig::default()
        };
        let catalog = Catalog::from_records(sample(), &config);
        assert!(!catalog.states().iter().any(|s| s.state_name == "Ohio"));
    }
}
