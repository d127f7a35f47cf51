use crate::foundation::core::{Color, IndexPath, Rect};

/// Classes of supplementary (non-item) views the layout can place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SupplementaryKind {
    /// Single header at the top of the whole collection.
    Header,
    /// Header above each non-empty section.
    SectionHeader,
    /// Footer below each section. Reserved; the flow layout never emits it.
    SectionFooter,
}

impl SupplementaryKind {
    /// Every supplementary kind.
    pub const ALL: [Self; 3] = [Self::Header, Self::SectionHeader, Self::SectionFooter];

    /// Identifier used when registering and dequeuing views with the render host.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::SectionHeader => "section-header",
            Self::SectionFooter => "section-footer",
        }
    }

    /// Inverse of [`SupplementaryKind::identifier`].
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.identifier() == identifier)
    }
}

/// What a set of layout attributes describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ElementCategory {
    /// An item cell backed by data.
    Cell,
    /// A header or footer view.
    Supplementary(SupplementaryKind),
    /// A non-interactive background view of the given registered kind.
    Decoration(&'static str),
}

/// Position and styling of one element, as computed by the layout engine.
///
/// Equality includes `color`, so two decorations with different backgrounds are never equal.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayoutAttributes {
    /// Element category (cell, supplementary or decoration).
    pub category: ElementCategory,
    /// Index path of the element. Decorations share the path of the cell they derive from.
    pub index_path: IndexPath,
    /// Frame in content coordinates.
    pub frame: Rect,
    /// Stacking order; higher values draw on top.
    pub z_index: i32,
    /// Background color, set on section background decorations only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl LayoutAttributes {
    /// Attributes for an item cell.
    pub fn for_cell(index_path: IndexPath, frame: Rect) -> Self {
        Self {
            category: ElementCategory::Cell,
            index_path,
            frame,
            z_index: 0,
            color: None,
        }
    }

    /// Attributes for a supplementary view of `kind`.
    pub fn for_supplementary(kind: SupplementaryKind, index_path: IndexPath, frame: Rect) -> Self {
        Self {
            category: ElementCategory::Supplementary(kind),
            index_path,
            frame,
            z_index: 0,
            color: None,
        }
    }

    /// Attributes for a decoration view of the registered `kind`.
    pub fn for_decoration(
        kind: &'static str,
        index_path: IndexPath,
        frame: Rect,
        color: Color,
    ) -> Self {
        Self {
            category: ElementCategory::Decoration(kind),
            index_path,
            frame,
            z_index: 0,
            color: Some(color),
        }
    }

    /// Protocol-level element kind name.
    pub fn element_kind(&self) -> &'static str {
        match self.category {
            ElementCategory::Cell => "cell",
            ElementCategory::Supplementary(SupplementaryKind::Header) => "globalHeader",
            ElementCategory::Supplementary(SupplementaryKind::SectionHeader) => "sectionHeader",
            ElementCategory::Supplementary(SupplementaryKind::SectionFooter) => "sectionFooter",
            ElementCategory::Decoration(_) => "decoration",
        }
    }

    /// Whether these attributes describe an item cell.
    pub fn is_cell(&self) -> bool {
        self.category == ElementCategory::Cell
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/attributes.rs"]
mod tests;
