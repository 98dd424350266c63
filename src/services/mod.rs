//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `classifier.rs` — keyword parsing, bucket rules, aggregation pass (pure).
//! - `dataset.rs` — CSV loading and required-column check.
//! - `rules.rs` — rule table loading (built-in or TOML) and validation.
//! - `output.rs` — JSON/text output helpers + atomic summary write.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod classifier;
pub mod dataset;
pub mod output;
pub mod rules;
