//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — three-tier config schema, deep merge, path resolution.
//! - `scanner.rs` — markdown discovery under a doc root with exclusions.
//! - `taxonomy.rs` — recognized-keyword loading from the taxonomy document.
//! - `context.rs` — per-project snapshot assembly (resolver injected).
//! - `validate.rs` — pure keyword-vs-taxonomy partitioning.
//! - `index.rs` — keyword -> documents mapping.
//! - `graph.rs` — co-occurrence weights + DOT rendering.
//! - `stats.rs` — per-keyword document frequency.
//! - `suggest.rs` — pluggable suggestion scoring strategies.
//! - `search.rs` — keyword/content/cross-reference lookups.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod context;
pub mod graph;
pub mod index;
pub mod output;
pub mod scanner;
pub mod search;
pub mod stats;
pub mod suggest;
pub mod taxonomy;
pub mod validate;
