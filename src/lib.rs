//! Help text rendering for the EVE bot.
//!
//! The bot's help is a YAML tree of groups and help topics. This crate loads
//! that tree, flattens it depth first and renders it as an aligned listing
//! for the terminal.

pub mod domain;
pub use domain::{FlattenedEntry, HelpGroup, HelpNode, Node, ShapeError, flatten_root};

/// Loading help documents from disk.
pub mod storage;
pub use storage::{DEFAULT_ROOT, HelpDocument, LoadError};

pub mod render;
pub use render::Layout;
