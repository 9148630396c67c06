//! Module emitters.
//!
//! Render materialized icons and the aggregate views (index, manifest)
//! into source-module strings via the template engine, then run each
//! result through the formatter.

pub mod aggregate;
pub mod icon;

pub use aggregate::{build_manifest, emit_index_module, emit_manifest_module};
pub use icon::emit_icon_module;
