use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::core::{Color, IndexPath, Rect},
    layout::attributes::{LayoutAttributes, SupplementaryKind},
};

/// What a dequeued view is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ViewRole {
    /// Item cell.
    Cell,
    /// Header or footer of the given kind.
    Supplementary(SupplementaryKind),
    /// Section background painted from the decoration's color.
    SectionBackground,
}

/// A view handed out by the host and positioned by layout attributes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ReusableView {
    /// Registered class name.
    pub class: &'static str,
    /// Identifier the view was dequeued with.
    pub reuse_identifier: String,
    /// Role of the view in the collection.
    pub role: ViewRole,
    /// Index path of the element the view displays.
    pub index_path: IndexPath,
    /// Frame in content coordinates.
    pub frame: Rect,
    /// Stacking order.
    pub z_index: i32,
    /// Background fill.
    pub background: Color,
    /// Optional text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ReusableView {
    fn new(
        class: &'static str,
        reuse_identifier: &str,
        role: ViewRole,
        index_path: IndexPath,
    ) -> Self {
        Self {
            class,
            reuse_identifier: reuse_identifier.to_owned(),
            role,
            index_path,
            frame: Rect::ZERO,
            z_index: 0,
            background: Color::TRANSPARENT,
            label: None,
        }
    }

    /// Position the view. Section backgrounds also take the decoration color, defaulting to
    /// white when the attributes carry none.
    pub fn apply(&mut self, attributes: &LayoutAttributes) {
        self.index_path = attributes.index_path;
        self.frame = attributes.frame;
        self.z_index = attributes.z_index;
        if self.role == ViewRole::SectionBackground {
            self.background = attributes.color.unwrap_or(Color::WHITE);
        }
    }
}

/// Registered view classes, keyed the way they are dequeued.
///
/// Dequeuing something that was never registered, or under a different class, is a programming
/// error and panics.
#[derive(Debug, Default)]
pub struct ViewRegistry {
    cells: BTreeMap<String, &'static str>,
    supplementary: BTreeMap<(&'static str, String), &'static str>,
    decorations: BTreeSet<&'static str>,
}

impl ViewRegistry {
    /// Register a cell class under an explicit reuse identifier.
    pub fn register_cell(&mut self, class: &'static str, reuse_identifier: impl Into<String>) {
        self.cells.insert(reuse_identifier.into(), class);
    }

    /// Register several cell classes, each under its own class name.
    pub fn register_cell_classes(&mut self, classes: &[&'static str]) {
        for class in classes {
            self.register_cell(*class, *class);
        }
    }

    /// Register a supplementary view class for `kind`, reusable under its class name.
    pub fn register_supplementary(&mut self, class: &'static str, kind: SupplementaryKind) {
        self.supplementary
            .insert((kind.identifier(), class.to_owned()), class);
    }

    /// Register a decoration-view kind.
    pub fn register_decoration(&mut self, kind: &'static str) {
        self.decorations.insert(kind);
    }

    /// Whether a decoration kind has been registered.
    pub fn is_decoration_registered(&self, kind: &str) -> bool {
        self.decorations.contains(kind)
    }

    /// Dequeue a cell by reuse identifier.
    pub fn dequeue_cell(&self, reuse_identifier: &str, index_path: IndexPath) -> ReusableView {
        let Some(class) = self.cells.get(reuse_identifier) else {
            panic!("no cell registered for reuse identifier '{reuse_identifier}'");
        };
        ReusableView::new(*class, reuse_identifier, ViewRole::Cell, index_path)
    }

    /// Dequeue a cell registered under its class name and check it has that class.
    pub fn dequeue_cell_of(&self, class: &'static str, index_path: IndexPath) -> ReusableView {
        let view = self.dequeue_cell(class, index_path);
        if view.class != class {
            panic!(
                "could not dequeue cell of type {class} with identifier {class}: registered class is {}",
                view.class
            );
        }
        view
    }

    /// Dequeue a supplementary view of `kind` registered with `class`.
    pub fn dequeue_supplementary(
        &self,
        kind: SupplementaryKind,
        class: &'static str,
        index_path: IndexPath,
    ) -> ReusableView {
        let key = (kind.identifier(), class.to_owned());
        let Some(registered) = self.supplementary.get(&key) else {
            panic!(
                "could not dequeue supplementary view of kind {} with type {class}",
                kind.identifier()
            );
        };
        ReusableView::new(
            *registered,
            class,
            ViewRole::Supplementary(kind),
            index_path,
        )
    }

    /// Dequeue the section background view for a decoration of `kind`.
    pub fn dequeue_decoration(&self, kind: &'static str, index_path: IndexPath) -> ReusableView {
        if !self.is_decoration_registered(kind) {
            panic!("no decoration view registered for kind '{kind}'");
        }
        ReusableView::new(kind, kind, ViewRole::SectionBackground, index_path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/registry.rs"]
mod tests;
