//! SVG optimization and tree abstraction.
//!
//! Two collaborators with small contracts:
//! - [`Optimizer`] turns raw SVG markup into minimal, normalized
//!   markup (comments, metadata elements and editor attributes
//!   removed, `fill` optionally stripped).
//! - [`tree::abstract_tree`] parses optimized markup into one typed
//!   [`AbstractNode`](icongen_core::AbstractNode) root.

pub mod optimize;
pub mod tree;

pub use optimize::Optimizer;
