//! Depth-first flattening of the help tree into display rows.

use tracing::{debug, instrument};

use crate::domain::{HelpGroup, HelpNode, Node};

/// One row of the flattened help tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedEntry {
    /// The node's key within its parent group.
    pub label: String,
    /// The help topic, present only for leaves.
    pub detail: Option<HelpNode>,
    /// Nesting level of the node.
    pub depth: usize,
}

impl FlattenedEntry {
    /// A row for a help topic.
    #[must_use]
    pub fn leaf(label: impl Into<String>, detail: HelpNode, depth: usize) -> Self {
        Self {
            label: label.into(),
            detail: Some(detail),
            depth,
        }
    }

    /// A header row for a group.
    #[must_use]
    pub fn header(label: impl Into<String>, depth: usize) -> Self {
        Self {
            label: label.into(),
            detail: None,
            depth,
        }
    }

    /// Whether this row is a group header.
    #[must_use]
    pub const fn is_header(&self) -> bool {
        self.detail.is_none()
    }
}

/// Flattens the node stored under `key` at the given depth.
///
/// A leaf yields a single row. A group yields its own header row followed by
/// the rows of each child, in declaration order, one level deeper.
#[must_use]
pub fn flatten(key: &str, node: &Node, depth: usize) -> Vec<FlattenedEntry> {
    match node {
        Node::Leaf(leaf) => vec![FlattenedEntry::leaf(key, leaf.clone(), depth)],
        Node::Group(group) => {
            let mut entries = vec![FlattenedEntry::header(key, depth)];
            entries.extend(resolve(group, depth));
            entries
        }
    }
}

/// Flattens the children of `group` at `depth + 1`, without a header row for
/// the group itself.
#[must_use]
pub fn resolve(group: &HelpGroup, depth: usize) -> Vec<FlattenedEntry> {
    group
        .iter()
        .flat_map(|(key, child)| flatten(key, child, depth + 1))
        .collect()
}

/// Flattens a whole help tree.
///
/// The root key is never emitted; its children appear at depth 1.
#[must_use]
#[instrument(skip_all, fields(children = root.len()))]
pub fn flatten_root(root: &HelpGroup) -> Vec<FlattenedEntry> {
    let entries = resolve(root, 0);
    debug!(rows = entries.len(), "flattened help tree");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(title: &str, desc: &str) -> HelpNode {
        HelpNode::new(title, desc)
    }

    fn sample() -> HelpGroup {
        let mut jita = HelpGroup::default();
        jita.push("price", leaf("Jita price", "Buy and sell orders in Jita"));
        jita.push("history", leaf("Price history", "Daily averages"));

        let mut market = HelpGroup::default();
        market.push("jita", jita);
        market.push("search", leaf("Search", "Find an item by name"));

        let mut root = HelpGroup::default();
        root.push("market", market);
        root.push("skills", leaf("Skills", "Skills required to fly a ship"));
        root
    }

    #[test]
    fn leaf_yields_one_entry_at_given_depth() {
        let node = Node::Leaf(leaf("Run it", "Runs the thing"));

        let entries = flatten("run", &node, 3);

        let expected = FlattenedEntry::leaf("run", leaf("Run it", "Runs the thing"), 3);
        assert_eq!(entries, vec![expected]);
    }

    #[test]
    fn group_yields_header_then_children_one_level_deeper() {
        let mut group = HelpGroup::default();
        group.push("b", leaf("B", "second"));
        group.push("a", leaf("A", "first"));

        let entries = flatten("cmds", &Node::Group(group), 2);

        assert_eq!(
            entries,
            vec![
                FlattenedEntry::header("cmds", 2),
                FlattenedEntry::leaf("b", leaf("B", "second"), 3),
                FlattenedEntry::leaf("a", leaf("A", "first"), 3),
            ]
        );
    }

    #[test]
    fn nested_groups_are_depth_first_pre_order() {
        let entries = flatten_root(&sample());

        let rows: Vec<_> = entries
            .iter()
            .map(|entry| (entry.label.as_str(), entry.depth, entry.is_header()))
            .collect();
        assert_eq!(
            rows,
            [
                ("market", 1, true),
                ("jita", 2, true),
                ("price", 3, false),
                ("history", 3, false),
                ("search", 2, false),
                ("skills", 1, false),
            ]
        );
    }

    #[test]
    fn root_key_is_never_emitted() {
        let mut root = HelpGroup::default();
        root.push("eve", leaf("Eve", "Shares the root's name"));

        let entries = flatten_root(&root);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].depth, 1);
        assert!(!entries[0].is_header());
    }

    #[test]
    fn empty_root_yields_nothing() {
        assert!(flatten_root(&HelpGroup::default()).is_empty());
    }

    #[test]
    fn empty_child_group_yields_only_its_header() {
        let mut root = HelpGroup::default();
        root.push("empty", HelpGroup::default());

        let entries = flatten_root(&root);
        assert_eq!(entries, vec![FlattenedEntry::header("empty", 1)]);
    }

    #[test]
    fn flattening_is_deterministic() {
        let tree = sample();
        assert_eq!(flatten_root(&tree), flatten_root(&tree));
    }
}
