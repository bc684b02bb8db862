// crates/locsniff-core/src/model.rs

//! Record types: the raw serde view of the external dataset and the three
//! domain record kinds derived from it.

use serde::{Deserialize, Deserializer, Serialize};

/// The three dictionary tiers, probed in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Country,
    State,
    City,
}

/// Raw dataset row as it comes from JSON.
///
/// NOTE: This type mirrors the external dataset and is not part of the
/// public matching API; it exists so rows can be validated one at a time
/// (a bad row is skipped and counted, never fatal).
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCityRecord {
    pub city_name: String,
    #[serde(default)]
    pub city_name_latin: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    pub country_name: String,
    pub country_abbr2: String,
    pub country_abbr3: String,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub state_abbr: Option<String>,
    #[serde(default)]
    pub country_capital: bool,
    #[serde(default)]
    pub state_capital: bool,
    #[serde(default)]
    pub other_capital: bool,
    #[serde(default, deserialize_with = "lenient_population")]
    pub population: Option<u64>,
}

/// Accept population as a JSON number, a numeric string, or null.
///
/// Anything else fails the row (surfaced by the load step as a skipped
/// record), not the whole dataset.
fn lenient_population<'de, D>(de: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Num(f64),
        Text(String),
        None,
    }

    match Field::deserialize(de)? {
        Field::Num(n) if n >= 0.0 => Ok(Some(n as u64)),
        Field::Num(n) => Err(serde::de::Error::custom(format!(
            "negative population: {n}"
        ))),
        Field::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>()
                .map(|n| Some(n as u64))
                .map_err(|_| serde::de::Error::custom(format!("unparsable population: {s:?}")))
        }
        Field::None => Ok(None),
    }
}

impl RawCityRecord {
    /// Reject rows whose required identity fields are empty.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (field, value) in [
            ("cityName", &self.city_name),
            ("countryName", &self.country_name),
            ("countryAbbr2", &self.country_abbr2),
            ("countryAbbr3", &self.country_abbr3),
        ] {
            if value.trim().is_empty() {
                return Err(format!("missing required field {field}"));
            }
        }
        Ok(())
    }

    pub fn is_capital(&self) -> bool {
        self.country_capital || self.state_capital || self.other_capital
    }
}

/// A country, projected out of the retained city list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryRecord {
    pub name: String,
    pub abbr2: String,
    pub abbr3: String,
}

/// A state/province, projected out of the retained city list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateRecord {
    pub country_name: String,
    pub country_abbr2: String,
    pub country_abbr3: String,
    pub state_name: String,
    pub state_abbr: Option<String>,
}

/// A city that survived catalog filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityRecord {
    pub city_name: String,
    pub city_name_latin: String,
    pub state_name: Option<String>,
    pub state_abbr: Option<String>,
    pub country_name: String,
    pub country_abbr2: String,
    pub country_abbr3: String,
    pub population: Option<u64>,
    pub country_capital: bool,
    pub state_capital: bool,
    pub other_capital: bool,
}

impl From<RawCityRecord> for CityRecord {
    fn from(raw: RawCityRecord) -> Self {
        let latin = raw
            .city_name_latin
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| raw.city_name.clone());
        CityRecord {
            city_name: raw.city_name,
            city_name_latin: latin,
            state_name: raw.state_name.filter(|s| !s.trim().is_empty()),
            state_abbr: raw.state_abbr.filter(|s| !s.trim().is_empty()),
            country_name: raw.country_name,
            country_abbr2: raw.country_abbr2,
            country_abbr3: raw.country_abbr3,
            population: raw.population,
            country_capital: raw.country_capital,
            state_capital: raw.state_capital,
            other_capital: raw.other_capital,
        }
    }
}

impl CountryRecord {
    /// Template field values for the country tier.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("abbr2", self.abbr2.as_str()),
            ("abbr3", self.abbr3.as_str()),
        ]
    }
}

impl StateRecord {
    /// Template field values for the state tier. `stateAbbr` is present
    /// only when the dataset carried one.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut out = vec![
            ("countryName", self.country_name.as_str()),
            ("countryAbbr2", self.country_abbr2.as_str()),
            ("countryAbbr3", self.country_abbr3.as_str()),
            ("stateName", self.state_name.as_str()),
        ];
        if let Some(abbr) = &self.state_abbr {
            out.push(("stateAbbr", abbr.as_str()));
        }
        out
    }
}

impl CityRecord {
    /// Template field values for the city tier, using the canonical spelling.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        self.pairs_named(&self.city_name)
    }

    /// Template field values with the Latin spelling substituted for the
    /// city name, or `None` when the two spellings coincide.
    pub fn latin_pairs(&self) -> Option<Vec<(&'static str, &str)>> {
        if self.city_name_latin == self.city_name {
            return None;
        }
        Some(self.pairs_named(&self.city_name_latin))
    }

    fn pairs_named<'a>(&'a self, city_name: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut out = vec![("cityName", city_name)];
        if let Some(state) = &self.state_name {
            out.push(("stateName", state.as_str()));
        }
        if let Some(abbr) = &self.state_abbr {
            out.push(("stateAbbr", abbr.as_str()));
        }
        out.push(("countryName", self.country_name.as_str()));
        out.push(("countryAbbr2", self.country_abbr2.as_str()));
        out.push(("countryAbbr3", self.country_abbr3.as_str()));
        out
    }

    pub fn is_capital(&self) -> bool {
        self.country_capital || self.state_capital || self.other_capital
    }
}
