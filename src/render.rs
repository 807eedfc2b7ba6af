//! Formatting flattened help rows as aligned text.
//!
//! Each row is one line: the label, indented by its depth and prefixed with
//! `/` for groups or `:` for help topics, left-justified in a fixed column.
//! Help topics follow it with the title in a second column of the same width,
//! then the description. Widths count characters and never truncate.

use std::io::{self, Write};

use crate::domain::FlattenedEntry;

/// Column geometry of the rendered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Spaces of indentation per nesting level.
    pub indent_width: usize,
    /// Width of the label column and of the title column.
    pub column_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indent_width: 8,
            column_width: 30,
        }
    }
}

impl Layout {
    /// Renders a single row, without a trailing newline.
    ///
    /// Flattened depths start at 1 for the root's children, so rows are drawn
    /// one level shallower than their depth. The indentation is part of the
    /// label column, which keeps titles aligned across depths.
    #[must_use]
    pub fn render_entry(&self, entry: &FlattenedEntry) -> String {
        let indent = " ".repeat(entry.depth.saturating_sub(1) * self.indent_width);
        let prefix = if entry.is_header() { '/' } else { ':' };
        let tag = format!("{indent}{prefix}{}", entry.label);
        let width = self.column_width;

        let detail = entry.detail.as_ref();
        detail.map_or_else(
            || format!("{tag:<width$}"),
            |node| format!("{tag:<width$}{:<width$}{}", node.title(), node.desc()),
        )
    }

    /// Writes every row, one per line, in order.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn render<W: Write>(&self, entries: &[FlattenedEntry], writer: &mut W) -> io::Result<()> {
        for entry in entries {
            writeln!(writer, "{}", self.render_entry(entry))?;
        }
        Ok(())
    }
}
