mod document;
pub use document::{DEFAULT_ROOT, HelpDocument, LoadError};
