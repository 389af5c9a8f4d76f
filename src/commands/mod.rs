//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `query.rs` — validate/search over built project contexts.
//! - `analyze.rs` — index/graph/stats/suggest aggregations.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod analyze;
pub mod query;

pub use analyze::handle_analyze_commands;
pub use query::handle_query_commands;
