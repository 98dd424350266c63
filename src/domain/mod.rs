//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep record, rule and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — records, buckets, rule table, summary/report structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `KeywordSummary` is the output file contract and the report structs back
//! `--json` output. Keep schema-impacting changes synchronized with
//! `docs/contracts/*`.

pub mod models;
