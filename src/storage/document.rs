use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

use serde_yaml::Mapping;
use tracing::{debug, instrument};

use crate::domain::{HelpGroup, ShapeError};

/// The key under which the bot's help tree lives.
pub const DEFAULT_ROOT: &str = "eve";

/// A parsed help document.
///
/// The top level is a mapping from root keys to help trees. Trees are only
/// classified when looked up with [`HelpDocument::root`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpDocument {
    top: Mapping,
}

impl HelpDocument {
    /// Parses a help document from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Yaml`] if the input is not a YAML mapping.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let top = serde_yaml::from_reader(reader)?;
        Ok(Self { top })
    }

    /// Loads a help document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if there is no file at `path`, or an
    /// error if it cannot be read or parsed.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|io_error| match io_error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(io_error),
        })?;

        let document = Self::from_reader(BufReader::new(file))?;
        debug!(roots = document.top.len(), "loaded help document");
        Ok(document)
    }

    /// Looks up and classifies the help tree stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingRoot`] if the document has no such key, or
    /// [`LoadError::Shape`] if the tree under it is malformed.
    #[instrument(skip(self))]
    pub fn root(&self, key: &str) -> Result<HelpGroup, LoadError> {
        let value = self
            .top
            .get(key)
            .ok_or_else(|| LoadError::MissingRoot(key.to_owned()))?;

        Ok(HelpGroup::classify(key, value)?)
    }
}

impl FromStr for HelpDocument {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let top = serde_yaml::from_str(s)?;
        Ok(Self { top })
    }
}

/// Failures while loading a help tree.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The help document does not exist.
    #[error("help document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The document is not valid YAML, or its top level is not a mapping.
    #[error("failed to parse help document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The requested root key is absent.
    #[error("help document has no `{0}` key")]
    MissingRoot(String),

    /// The help tree is malformed.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
