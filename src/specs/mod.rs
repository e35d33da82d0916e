// src/specs/mod.rs
//! # Document "specs"
//!
//! Each spec knows the shape of one external document and how to read it
//! tolerantly. Nothing here touches the network or the filesystem.
//!
//! - `ratings` – one row of the ratings CSV snapshot → `GameRecord`.
//!   Column lookup is by header name, so column order and extra columns do not
//!   matter. A row missing a required numeric field is a `MalformedRow`.
//! - `thing` – the catalog's `thing` XML (requested with `stats=1&versions=1`)
//!   → `Details`: complexity weight, expansion / reimplementation flags and the
//!   set of distinct version ids.
//!
//! Callers decide what a failure means: the loader drops malformed rows, the
//! enricher leaves a record unenriched on a parse failure.
//!
//! ```text
//! store::load_games → specs::ratings::parse_row
//! enrich::Enricher  → Catalog::fetch → specs::thing::parse_details
//! ```
//!
//! Specs are tested offline against small fixtures under `tests/fixtures/`.
pub mod ratings;
pub mod thing;
