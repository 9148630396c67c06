//! Code generation pipeline for SVG icons.
//!
//! Transforms a directory tree of raw SVG icon files into generated
//! TypeScript source modules using Handlebars templates: one module
//! per icon variant, an index module re-exporting every icon, and a
//! manifest module listing which icon names exist per theme.
//!
//! The pipeline is deterministic and offline; output content and
//! ordering never depend on filesystem enumeration order or task
//! scheduling.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod emit;
pub mod fixup;
pub mod format;
pub mod materialize;
pub mod names;
pub mod pipeline;
pub mod svg;
pub mod template_engine;

pub use format::{Formatter, TsFormatter};
pub use pipeline::{BuildReport, Pipeline};
pub use template_engine::TemplateEngine;
