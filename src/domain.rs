//! The help tree model and its flattening into display rows.

mod node;
pub use node::{HelpGroup, HelpNode, Node, ShapeError};

/// Depth-first flattening of the help tree.
pub mod flatten;
pub use flatten::{FlattenedEntry, flatten, flatten_root, resolve};
