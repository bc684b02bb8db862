// crates/locsniff-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) for the two external
//! resources: the geographic dataset and the alias file. Missing resources
//! are fatal to initialization — the engine cannot produce meaningful
//! results without a catalog — so errors here propagate hard instead of
//! degrading into "no matches".

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;

use crate::alias::AliasTable;
use crate::catalog::{Catalog, CatalogConfig, LoadReport};
use crate::error::{Result, SniffError};
use crate::sniffer::Sniffer;

/// Parse a dataset file: a JSON array of raw city rows.
///
/// Rows are returned untyped; per-row conversion (and skip-and-count
/// handling of malformed rows) happens in [`Catalog::from_raw`].
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<serde_json::Value>> {
    let reader = open_stream(path.as_ref())?;
    let rows: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    Ok(rows)
}

/// Parse an alias file: a JSON object of alias → canonical name.
///
/// Definition order in the file is the application order, preserved by the
/// [`IndexMap`] the table is deserialized into.
pub fn load_aliases(path: impl AsRef<Path>) -> Result<AliasTable> {
    let reader = open_stream(path.as_ref())?;
    let entries: IndexMap<String, String> = serde_json::from_reader(reader)?;
    AliasTable::from_map(entries)
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// ends in `.gz`. Returns a generic reader so callers don't care about the
/// compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        SniffError::NotFound(format!("resource not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(SniffError::InvalidData(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

impl Sniffer {
    /// Build an engine straight from files: a dataset (required) and an
    /// alias file (optional). The report carries malformed-row diagnostics.
    pub fn from_paths(
        dataset: impl AsRef<Path>,
        aliases: Option<&Path>,
        config: &CatalogConfig,
    ) -> Result<(Self, LoadReport)> {
        let rows = load_dataset(dataset)?;
        let (catalog, report) = Catalog::from_raw(rows, config);
        if catalog.is_empty() {
            return Err(SniffError::InvalidData(
                "dataset produced an empty catalog".into(),
            ));
        }
        let aliases = match aliases {
            Some(path) => load_aliases(path)?,
            None => AliasTable::new(),
        };
        Ok((Sniffer::new(catalog, aliases), report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("locsniff-test-{name}"));
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_dataset_is_fatal() {
        let err = load_dataset("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SniffError::NotFound(_)));
    }

    #[test]
    fn aliases_preserve_definition_order() {
        let path = temp_file(
            "aliases.json",
            r#"{"nyc": "new york city", "sf": "san francisco", "la": "los angeles"}"#,
        );
        let table = load_aliases(&path).unwrap();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["nyc", "sf", "la"]);
    }

    #[test]
    fn from_paths_builds_a_working_engine() {
        let path = temp_file(
            "dataset.json",
            r#"[
                {"cityName": "Paris", "countryName": "France",
                 "countryAbbr2": "fr", "countryAbbr3": "fra", "population": 2148000},
                {"cityName": "broken row"}
            ]"#,
        );
        let (sniffer, report) =
            Sniffer::from_paths(&path, None, &CatalogConfig::default()).unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 1);
        assert!(sniffer.sniff("paris, france").is_match());
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let path = temp_file("empty.json", "[]");
        let err = Sniffer::from_paths(&path, None, &CatalogConfig::default()).unwrap_err();
        assert!(matches!(err, SniffError::InvalidData(_)));
    }
}
