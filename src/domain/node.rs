//! The help tree: leaves carrying a title and description, and named groups
//! of further nodes.
//!
//! Classification is total. Every YAML value either becomes exactly one
//! [`Node`] variant or is rejected with a [`ShapeError`] naming where in the
//! document the problem is.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

const TITLE: &str = "title";
const DESC: &str = "desc";

/// A single help topic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelpNode {
    title: String,
    desc: String,
}

impl HelpNode {
    /// Creates a help topic from its short title and longer description.
    #[must_use]
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
        }
    }

    /// The short title shown in the second column.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The description shown after the title.
    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }
}

/// A named category of help nodes.
///
/// Children are kept in declaration order, which is also the output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpGroup {
    children: Vec<(String, Node)>,
}

impl HelpGroup {
    /// Classifies `value` as a group.
    ///
    /// `path` is the dotted location of `value` in the document and is only
    /// used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NotAMapping`] if `value` is not a mapping, or any
    /// error raised while classifying its descendants.
    pub fn classify(path: &str, value: &Value) -> Result<Self, ShapeError> {
        let Value::Mapping(mapping) = value else {
            return Err(ShapeError::NotAMapping {
                path: path.to_owned(),
                found: value_kind(value),
            });
        };
        Self::from_mapping(path, mapping)
    }

    fn from_mapping(path: &str, mapping: &Mapping) -> Result<Self, ShapeError> {
        let children = mapping
            .iter()
            .map(|(key, value)| -> Result<_, ShapeError> {
                let key = key.as_str().ok_or_else(|| ShapeError::NonStringKey {
                    path: path.to_owned(),
                })?;
                let node = Node::classify(&child_path(path, key), value)?;
                Ok((key.to_owned(), node))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { children })
    }

    /// Appends a child, keeping declaration order.
    pub fn push(&mut self, key: impl Into<String>, node: impl Into<Node>) {
        self.children.push((key.into(), node.into()));
    }

    /// Iterates over the children in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Looks up a direct child by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children
            .iter()
            .find_map(|(k, node)| (k == key).then_some(node))
    }

    /// The number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A node in the help tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A help topic.
    Leaf(HelpNode),
    /// A category of further nodes.
    Group(HelpGroup),
}

impl Node {
    /// Classifies a parsed YAML value.
    ///
    /// Only `title` and `desc` keys bound to non-mapping values count as leaf
    /// fields. A mapping with both is a leaf, and must define nothing else. A
    /// mapping with only one is an incomplete leaf. Any other mapping is a
    /// group, even if it has children named `title` or `desc`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] describing the first malformed node found,
    /// in document order.
    pub fn classify(path: &str, value: &Value) -> Result<Self, ShapeError> {
        let Value::Mapping(mapping) = value else {
            return Err(ShapeError::NotAMapping {
                path: path.to_owned(),
                found: value_kind(value),
            });
        };

        let field = |key: &str| mapping.get(key).filter(|value| !value.is_mapping());

        match (field(TITLE), field(DESC)) {
            (Some(_), Some(_)) => serde_yaml::from_value(value.clone())
                .map(Self::Leaf)
                .map_err(|source| ShapeError::MalformedLeaf {
                    path: path.to_owned(),
                    source,
                }),
            (Some(_), None) => Err(ShapeError::IncompleteLeaf {
                path: path.to_owned(),
                missing: DESC,
            }),
            (None, Some(_)) => Err(ShapeError::IncompleteLeaf {
                path: path.to_owned(),
                missing: TITLE,
            }),
            (None, None) => HelpGroup::from_mapping(path, mapping).map(Self::Group),
        }
    }
}

impl From<HelpNode> for Node {
    fn from(node: HelpNode) -> Self {
        Self::Leaf(node)
    }
}

impl From<HelpGroup> for Node {
    fn from(group: HelpGroup) -> Self {
        Self::Group(group)
    }
}

/// The ways a help document can fail to describe a tree.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// A node that must be a mapping is a scalar, sequence or null.
    #[error("node `{path}` must be a mapping, found {found}")]
    NotAMapping {
        /// Dotted location of the node.
        path: String,
        /// The kind of value found instead.
        found: &'static str,
    },

    /// A group contains a key that is not a string.
    #[error("group `{path}` contains a non-string key")]
    NonStringKey {
        /// Dotted location of the group.
        path: String,
    },

    /// A node defines only one of `title` and `desc`.
    #[error("help entry `{path}` is missing its `{missing}` field")]
    IncompleteLeaf {
        /// Dotted location of the node.
        path: String,
        /// The field that is absent.
        missing: &'static str,
    },

    /// A node defines `title` and `desc` but is otherwise invalid.
    #[error("help entry `{path}` is malformed: {source}")]
    MalformedLeaf {
        /// Dotted location of the node.
        path: String,
        /// The underlying deserialization error.
        source: serde_yaml::Error,
    },
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
