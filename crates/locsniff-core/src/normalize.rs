// crates/locsniff-core/src/normalize.rs

//! Query normalization.
//!
//! The same function canonicalizes both the strings users type and (via
//! lowercasing at dictionary-build time) the keys they are matched against,
//! so accents, punctuation spacing, and casing cannot cause false misses.

use crate::alias::AliasTable;
use crate::pattern::SEPARATORS;
use crate::text::clean;

/// Normalize a raw query string.
///
/// Steps, in order (each depends on the previous):
/// 1. trim and collapse whitespace runs;
/// 2. keep only the text before the first ` & ` — conjunctions denote
///    multi-location strings and only the first is recognized;
/// 3. lowercase;
/// 4. for each separator, normalize its spacing to `"<sep> "`: the stray
///    space before a separator is dropped and the conventional single
///    space after it is ensured ("Paris , France", "Paris,France" and
///    "Paris, France" all converge);
/// 5. alias substitution;
/// 6. lowercase again (aliases may reintroduce mixed case).
///
/// Diacritic folding is deliberately *not* part of normalization; the
/// dictionary registers both spellings of every key instead, and probes
/// retry the folded query, so either spelling of a query succeeds.
///
/// The result is a fixed point: `normalize(normalize(s)) == normalize(s)`
/// for a stable alias table.
pub fn normalize(raw: &str, aliases: &AliasTable) -> String {
    let mut s = clean(raw);
    if let Some(pos) = s.find(" & ") {
        s = s[..pos].trim().to_string();
    }
    s = s.to_lowercase();
    for sep in SEPARATORS {
        if sep.is_empty() {
            // The empty separator's stray-space form is a double space,
            // already removed by `clean`.
            continue;
        }
        s = s.replace(&format!(" {sep}"), sep);
        s = s.replace(sep, &format!("{sep} "));
        s = s.replace(&format!("{sep}  "), &format!("{sep} "));
    }
    aliases.apply(s.trim()).to_lowercase()
}
