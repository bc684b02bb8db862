//! locsniff-cli
//! ============
//!
//! Command-line interface for the `locsniff-core` location recognition
//! engine.
//!
//! This crate primarily provides a binary (`locsniff`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! locsniff --help
//! locsniff --data cities.json sniff "Paris , FRANCE"
//! locsniff --data cities.json stats
//! locsniff --data cities.json batch queries.txt
//! ```
//!
//! For programmatic access, use the `locsniff-core` crate directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
