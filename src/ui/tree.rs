//! Page tree.
//!
//! The composer produces a [`PageTree`]: an immutable description of the
//! page as a list of grid items. The host walks it to draw elements. Items
//! either span a full row or take one cell; cells are packed `columns` to a
//! row in order.

use gpui::SharedString;

use crate::ui::components::{ButtonMode, RichText, UrlButton};
use crate::ui::layout::Columns;
use crate::ui::theme::Theme;

/// Typographic role of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Large heading.
    Title,
    /// Medium label text.
    Label,
}

/// A node in the page tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Circular remote image.
    Avatar {
        url: SharedString,
        size: f32,
        padding_top: f32,
    },
    /// Centered single-style text.
    Text {
        text: SharedString,
        role: TextRole,
        padding_bottom: f32,
    },
    /// Link button.
    Button(UrlButton),
    /// Centered paragraph with embedded links.
    Paragraph { text: RichText, padding_y: f32 },
}

/// How much of a row an item takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// The whole row.
    Full,
    /// One cell.
    Cell,
}

/// An item in the page grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridItem {
    pub span: Span,
    pub node: Node,
}

/// A laid-out row of the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridRow<'a> {
    /// A full-width item.
    Full(&'a Node),
    /// Up to `columns` cells.
    Cells(Vec<&'a Node>),
}

/// The composed page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTree {
    theme: Theme,
    columns: Columns,
    items: Vec<GridItem>,
}

impl PageTree {
    /// Starts building a page.
    pub fn builder(theme: Theme, columns: Columns) -> PageTreeBuilder {
        PageTreeBuilder {
            theme,
            columns,
            items: Vec::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    /// Link buttons in order.
    pub fn buttons(&self) -> impl Iterator<Item = &UrlButton> {
        self.items.iter().filter_map(|item| match &item.node {
            Node::Button(button) => Some(button),
            _ => None,
        })
    }

    /// Paragraphs in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &RichText> {
        self.items.iter().filter_map(|item| match &item.node {
            Node::Paragraph { text, .. } => Some(text),
            _ => None,
        })
    }

    /// The single mode shared by every button, if there are any buttons
    /// and they agree.
    pub fn button_mode(&self) -> Option<ButtonMode> {
        let mut modes = self.buttons().map(UrlButton::mode);
        let first = modes.next()?;
        modes.all(|mode| mode == first).then_some(first)
    }

    /// Packs items into rows.
    pub fn rows(&self) -> Vec<GridRow<'_>> {
        let per_row = self.columns.count();
        let mut rows = Vec::new();
        let mut pending: Vec<&Node> = Vec::with_capacity(per_row);

        for item in &self.items {
            match item.span {
                Span::Full => {
                    if !pending.is_empty() {
                        rows.push(GridRow::Cells(std::mem::take(&mut pending)));
                    }
                    rows.push(GridRow::Full(&item.node));
                }
                Span::Cell => {
                    pending.push(&item.node);
                    if pending.len() == per_row {
                        rows.push(GridRow::Cells(std::mem::take(&mut pending)));
                    }
                }
            }
        }

        if !pending.is_empty() {
            rows.push(GridRow::Cells(pending));
        }
        rows
    }
}

/// Builder for [`PageTree`].
#[derive(Debug)]
pub struct PageTreeBuilder {
    theme: Theme,
    columns: Columns,
    items: Vec<GridItem>,
}

impl PageTreeBuilder {
    /// Adds a full-row item.
    pub fn full(mut self, node: Node) -> Self {
        self.items.push(GridItem {
            span: Span::Full,
            node,
        });
        self
    }

    /// Adds a single cell.
    pub fn cell(mut self, node: Node) -> Self {
        self.items.push(GridItem {
            span: Span::Cell,
            node,
        });
        self
    }

    /// Adds several cells.
    pub fn cells(self, nodes: impl IntoIterator<Item = Node>) -> Self {
        nodes.into_iter().fold(self, Self::cell)
    }

    pub fn build(self) -> PageTree {
        PageTree {
            theme: self.theme,
            columns: self.columns,
            items: self.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &'static str) -> Node {
        Node::Text {
            text: s.into(),
            role: TextRole::Label,
            padding_bottom: 0.0,
        }
    }

    fn shape(tree: &PageTree) -> Vec<usize> {
        tree.rows()
            .iter()
            .map(|row| match row {
                GridRow::Full(_) => 0,
                GridRow::Cells(cells) => cells.len(),
            })
            .collect()
    }

    #[test]
    fn cells_pack_by_column_count() {
        let tree = PageTree::builder(Theme::light(), Columns::Three)
            .full(text("head"))
            .cells(["a", "b", "c", "d", "e", "f"].map(text))
            .full(text("foot"))
            .build();
        assert_eq!(shape(&tree), vec![0, 3, 3, 0]);
    }

    #[test]
    fn short_last_row() {
        let tree = PageTree::builder(Theme::light(), Columns::Two)
            .cells(["a", "b", "c"].map(text))
            .full(text("foot"))
            .build();
        assert_eq!(shape(&tree), vec![2, 1, 0]);
    }

    #[test]
    fn single_column_one_cell_per_row() {
        let tree = PageTree::builder(Theme::dark(), Columns::One)
            .cells(["a", "b", "c"].map(text))
            .build();
        assert_eq!(shape(&tree), vec![1, 1, 1]);
    }

    #[test]
    fn full_item_flushes_partial_row() {
        let tree = PageTree::builder(Theme::dark(), Columns::Three)
            .cell(text("a"))
            .full(text("mid"))
            .cell(text("b"))
            .build();
        assert_eq!(shape(&tree), vec![1, 0, 1]);
        assert_eq!(tree.rows()[1], GridRow::Full(&text("mid")));
    }

    #[test]
    fn empty_tree_has_no_rows_or_mode() {
        let tree = PageTree::builder(Theme::light(), Columns::One).build();
        assert!(tree.rows().is_empty());
        assert_eq!(tree.button_mode(), None);
    }
}
