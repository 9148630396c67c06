//! Core types, errors, and configuration for the icon code generator.
//!
//! This crate provides the foundational types shared by the codegen
//! pipeline and the CLI:
//! - Strong domain types (`IconName`, `ThemeType`)
//! - The abstract icon data model (`AbstractNode`, `IconDefinition`)
//! - Error hierarchy with contextual information
//! - Pipeline configuration (`BuildConfig`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod theme;
mod types;

pub use config::{BuildConfig, OptimizerOptions};
pub use error::{Error, Result};
pub use theme::ThemeType;
pub use types::{AbstractNode, BuildTimeIconMeta, IconDefinition, IconName, Manifest, WriteFileMeta};
