// crates/locsniff-core/src/lib.rs

//! locsniff-core
//! =============
//!
//! Recognizes which city, state/province, or country a short free-text
//! string refers to ("Paris , FRANCE", "nyc", "Portland OR") by matching it
//! against a pre-generated dictionary of every plausible textual rendering
//! of every known location.
//!
//! The pipeline: a raw dataset is filtered and ordered into a [`Catalog`];
//! a fixed template set expands every catalog record into a
//! [`LocationDictionary`]; queries are canonicalized by [`normalize`] and
//! probed against the country, state, and city tiers in that order.

pub mod alias;
pub mod catalog;
pub mod dictionary;
pub mod error;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod pattern;
pub mod sniffer;
pub mod text;

// Re-exports
pub use crate::alias::AliasTable;
pub use crate::catalog::{Catalog, CatalogConfig, LoadReport};
pub use crate::dictionary::{DictionaryEntry, LocationDictionary};
pub use crate::error::{Result, SniffError};
pub use crate::model::{CityRecord, CountryRecord, RawCityRecord, RecordKind, StateRecord};
pub use crate::normalize::normalize;
pub use crate::sniffer::{MatchCache, MatchResult, MemoryCache, Sniffer, SnifferStats};
