// crates/locsniff-core/src/pattern.rs

//! The fixed template catalog and its rendering function.
//!
//! Every dictionary key is one template instantiated with one record's
//! field values and one separator. The template and separator sets are
//! configuration data, fixed for compatibility with existing consumers:
//! changing them changes which strings the engine recognizes.

use crate::model::RecordKind;

/// Separators a query may use between location parts ("Paris, France",
/// "Paris/France", ...). The empty separator covers "Paris France".
pub const SEPARATORS: [&str; 4] = ["", ",", "/", ":"];

/// Country tier: codes first so they out-rank name-derived keys on collision.
pub const COUNTRY_TEMPLATES: &[&str] = &["%abbr2", "%abbr3", "%name"];

/// State tier: bare forms, then state+country in both orders, every
/// abbr/name combination.
pub const STATE_TEMPLATES: &[&str] = &[
    "%stateAbbr",
    "%stateName",
    "%stateName%sep %countryName",
    "%stateName%sep %countryAbbr2",
    "%stateAbbr%sep %countryName",
    "%stateAbbr%sep %countryAbbr2",
    "%countryName%sep %stateName",
    "%countryName%sep %stateAbbr",
    "%countryAbbr2%sep %stateName",
    "%countryAbbr2%sep %stateAbbr",
];

/// City tier: bare name, city+state, city+country, prefixed forms, and the
/// three-part city+state+country permutations.
pub const CITY_TEMPLATES: &[&str] = &[
    "%cityName",
    "%cityName%sep %stateName",
    "%cityName%sep %stateAbbr",
    "%cityName%sep %countryName",
    "%cityName%sep %countryAbbr2",
    "%stateName%sep %cityName",
    "%stateAbbr%sep %cityName",
    "%countryName%sep %cityName",
    "%countryAbbr2%sep %cityName",
    "%cityName%sep %stateName%sep %countryName",
    "%cityName%sep %stateName%sep %countryAbbr2",
    "%cityName%sep %stateAbbr%sep %countryName",
    "%cityName%sep %stateAbbr%sep %countryAbbr2",
];

const COUNTRY_OUTPUT: &str = "%name";
const STATE_OUTPUT: &str = "%stateName, %countryName";
const CITY_OUTPUT: &str = "%cityName, %countryName";

/// Countries whose cities conventionally render with the state instead of
/// the country ("Portland, Oregon" rather than "Portland, United States").
const CITY_OUTPUT_OVERRIDES: &[(&str, &str)] = &[
    ("us", "%cityName, %stateName"),
    ("ca", "%cityName, %stateName"),
];

/// Key templates for one record kind.
pub fn templates(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Country => COUNTRY_TEMPLATES,
        RecordKind::State => STATE_TEMPLATES,
        RecordKind::City => CITY_TEMPLATES,
    }
}

/// Display-format template for one record kind, honoring the per-country
/// override table. `abbr2` is the record's country abbreviation (compared
/// case-insensitively); unknown or absent codes fall back to the default.
pub fn output_template(kind: RecordKind, abbr2: Option<&str>) -> &'static str {
    match kind {
        RecordKind::Country => COUNTRY_OUTPUT,
        RecordKind::State => STATE_OUTPUT,
        RecordKind::City => {
            if let Some(code) = abbr2 {
                for (candidate, template) in CITY_OUTPUT_OVERRIDES {
                    if candidate.eq_ignore_ascii_case(code) {
                        return template;
                    }
                }
            }
            CITY_OUTPUT
        }
    }
}

/// Instantiate a template with an ordered list of `(placeholder, value)`
/// pairs in a single left-to-right pass.
///
/// Returns `None` when the template references a placeholder absent from
/// `pairs` — the caller skips such templates (field presence varies per
/// record; `stateAbbr` in particular is optional). When several pair names
/// could match at one position, the longest wins, so `%stateName` is never
/// clipped by a shorter `%state...` entry.
pub fn render(template: &str, pairs: &[(&str, &str)]) -> Option<String> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        let mut best: Option<(&str, &str)> = None;
        for (name, value) in pairs {
            if tail.starts_with(name) && best.map_or(true, |(b, _)| name.len() > b.len()) {
                best = Some((name, value));
            }
        }
        let (name, value) = best?;
        out.push_str(value);
        rest = &tail[name.len()..];
    }
    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_in_order() {
        let pairs = [("cityName", "Paris"), ("countryName", "France"), ("sep", ",")];
        assert_eq!(
            render("%cityName%sep %countryName", &pairs).as_deref(),
            Some("Paris, France")
        );
    }

    #[test]
    fn render_with_empty_separator() {
        let pairs = [("cityName", "Paris"), ("countryName", "France"), ("sep", "")];
        assert_eq!(
            render("%cityName%sep %countryName", &pairs).as_deref(),
            Some("Paris France")
        );
    }

    #[test]
    fn render_missing_field_skips_template() {
        let pairs = [("cityName", "Paris"), ("sep", ",")];
        assert_eq!(render("%cityName%sep %stateAbbr", &pairs), None);
    }

    #[test]
    fn render_prefers_longest_placeholder() {
        // "state" must not clip "%stateName".
        let pairs = [("state", "WRONG"), ("stateName", "Oregon")];
        assert_eq!(render("%stateName", &pairs).as_deref(), Some("Oregon"));
    }

    #[test]
    fn city_output_override_is_case_insensitive() {
        assert_eq!(
            output_template(RecordKind::City, Some("US")),
            "%cityName, %stateName"
        );
        assert_eq!(
            output_template(RecordKind::City, Some("fr")),
            "%cityName, %countryName"
        );
        assert_eq!(output_template(RecordKind::Country, None), "%name");
    }
}
