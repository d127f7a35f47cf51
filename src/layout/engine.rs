use std::{cell::Cell, collections::BTreeMap, marker::PhantomData};

use crate::{
    foundation::core::{IndexPath, Rect, Size, frames_intersect},
    layout::attributes::{ElementCategory, LayoutAttributes, SupplementaryKind},
    layout::delegate::{FlowDelegate, HeaderTemplate, LayoutHost},
    sections::policy::SectionPolicy,
};

/// Decoration-view kind used for section backgrounds.
pub const SECTION_BACKGROUND_KIND: &str = "SectionBackgroundView";

/// Layout contract the render host drives.
///
/// Implementations cache a full attribute set between `prepare` and `invalidate`. Queries made
/// while nothing is cached return empty results rather than stale ones.
pub trait CollectionLayout {
    /// Decoration-view kind the host must register before `prepare`.
    fn decoration_kind(&self) -> &'static str;

    /// Recompute every attribute from the host's current counts and sizing delegate.
    fn prepare(&mut self, host: &dyn LayoutHost);

    /// Total scrollable content size; zero when nothing is prepared.
    fn content_size(&self) -> Size;

    /// Header, cell and decoration attributes whose frames intersect `rect`.
    fn attributes_for_elements(&self, rect: Rect) -> Vec<LayoutAttributes>;

    /// Attributes of the cell at `index_path`.
    fn attributes_for_item(&self, index_path: IndexPath) -> Option<LayoutAttributes>;

    /// Attributes of the supplementary view of `kind` at `index_path`.
    fn attributes_for_supplementary(
        &self,
        kind: SupplementaryKind,
        index_path: IndexPath,
    ) -> Option<LayoutAttributes>;

    /// Attributes of the decoration derived from the cell at `index_path`.
    fn attributes_for_decoration(&self, index_path: IndexPath) -> Option<LayoutAttributes>;

    /// Whether a viewport change to `new_bounds` requires a new `prepare`.
    fn should_invalidate(&self, new_bounds: Rect) -> bool;

    /// Drop every cached attribute without recomputing.
    fn invalidate(&mut self);
}

/// Attribute set produced by one `prepare` pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutSnapshot {
    header_attributes: Vec<LayoutAttributes>,
    item_attributes: BTreeMap<IndexPath, LayoutAttributes>,
    decoration_attributes: BTreeMap<IndexPath, LayoutAttributes>,
    all_attributes: Vec<LayoutAttributes>,
    content_height: f64,
    bounds: Rect,
}

impl LayoutSnapshot {
    /// Global header followed by section headers, in emission order.
    pub fn header_attributes(&self) -> &[LayoutAttributes] {
        &self.header_attributes
    }

    /// Cell attributes keyed by index path.
    pub fn item_attributes(&self) -> &BTreeMap<IndexPath, LayoutAttributes> {
        &self.item_attributes
    }

    /// Decoration attributes keyed by the index path of the cell they derive from.
    pub fn decoration_attributes(&self) -> &BTreeMap<IndexPath, LayoutAttributes> {
        &self.decoration_attributes
    }

    /// Headers then cells; decorations are kept separately.
    pub fn all_attributes(&self) -> &[LayoutAttributes] {
        &self.all_attributes
    }

    /// Accumulated height of the vertical flow.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Viewport bounds the snapshot was computed for.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Single-column vertical flow with a global header, optional section headers and a
/// background decoration behind every first-column cell.
///
/// `S` supplies section identifiers and their colors, `H` the global header's natural height.
#[derive(Debug)]
pub struct SectionFlowLayout<S, H> {
    header: H,
    has_section_headers: bool,
    snapshot: Option<LayoutSnapshot>,
    prepared_bounds: Option<Rect>,
    last_query_rect: Cell<Option<Rect>>,
    _sections: PhantomData<S>,
}

impl<S: SectionPolicy, H: HeaderTemplate> SectionFlowLayout<S, H> {
    /// Create an empty layout. Section headers are enabled by default.
    pub fn new(header: H) -> Self {
        Self {
            header,
            has_section_headers: true,
            snapshot: None,
            prepared_bounds: None,
            last_query_rect: Cell::new(None),
            _sections: PhantomData,
        }
    }

    /// Builder-style toggle for per-section headers.
    pub fn with_section_headers(mut self, enabled: bool) -> Self {
        self.has_section_headers = enabled;
        self
    }

    /// Enable or disable per-section headers. Takes effect on the next `prepare`.
    pub fn set_has_section_headers(&mut self, enabled: bool) {
        self.has_section_headers = enabled;
    }

    /// Whether per-section headers are emitted.
    pub fn has_section_headers(&self) -> bool {
        self.has_section_headers
    }

    /// Cached attribute set, if prepared and not invalidated since.
    pub fn snapshot(&self) -> Option<&LayoutSnapshot> {
        self.snapshot.as_ref()
    }

    /// Rectangle of the most recent `attributes_for_elements` query.
    pub fn last_query_rect(&self) -> Option<Rect> {
        self.last_query_rect.get()
    }

    fn global_header_attributes(&self, width: f64) -> LayoutAttributes {
        let height = self.header.natural_height().unwrap_or(0.0);
        LayoutAttributes::for_supplementary(
            SupplementaryKind::Header,
            IndexPath::new(0, 0),
            column_frame(0.0, Size::new(width, height)),
        )
    }

    fn decoration_for(
        &self,
        cell: &LayoutAttributes,
        delegate: Option<&dyn FlowDelegate>,
        width: f64,
    ) -> Option<LayoutAttributes> {
        if cell.frame.x0 != 0.0 {
            return None;
        }
        let section = S::identifier_for_ordinal(cell.index_path.section)?;
        let spacing = line_spacing(delegate, cell.index_path.section);

        let mut decoration = LayoutAttributes::for_decoration(
            SECTION_BACKGROUND_KIND,
            cell.index_path,
            column_frame(cell.frame.y0, Size::new(width, cell.frame.height() + spacing)),
            section.background_color(),
        );
        decoration.z_index = cell.z_index - 1;
        Some(decoration)
    }
}

impl<S: SectionPolicy, H: HeaderTemplate> CollectionLayout for SectionFlowLayout<S, H> {
    fn decoration_kind(&self) -> &'static str {
        SECTION_BACKGROUND_KIND
    }

    #[tracing::instrument(skip(self, host), fields(section_headers = self.has_section_headers))]
    fn prepare(&mut self, host: &dyn LayoutHost) {
        let bounds = host.bounds();
        let width = bounds.width();
        let delegate = host.delegate();
        let sections = host.number_of_sections();
        if sections != S::ALL.len() {
            tracing::warn!(
                reported = sections,
                declared = S::ALL.len(),
                "host section count does not match the section policy"
            );
        }

        let mut header_attributes = vec![self.global_header_attributes(width)];
        let mut height = header_attributes
            .last()
            .map_or(0.0, |header| header.frame.max_y());
        let mut item_attributes = BTreeMap::new();

        for section in 0..sections {
            let items = host.number_of_items(section);
            if items == 0 {
                continue;
            }

            if self.has_section_headers {
                let size = delegate
                    .and_then(|d| d.reference_size_for_header(width, section))
                    .unwrap_or(Size::ZERO);
                let header = LayoutAttributes::for_supplementary(
                    SupplementaryKind::SectionHeader,
                    IndexPath::new(section, 0),
                    column_frame(height, size),
                );
                height = header.frame.max_y();
                header_attributes.push(header);
            }

            let spacing = line_spacing(delegate, section);
            for item in 0..items {
                let index_path = IndexPath::new(section, item);
                let size = delegate
                    .and_then(|d| d.size_for_item(width, index_path))
                    .unwrap_or(Size::ZERO);
                let cell = LayoutAttributes::for_cell(
                    index_path,
                    column_frame(height, size),
                );
                height = cell.frame.max_y() + spacing;
                item_attributes.insert(index_path, cell);
            }
        }

        let decoration_attributes: BTreeMap<_, _> = item_attributes
            .values()
            .filter_map(|cell| {
                self.decoration_for(cell, delegate, width)
                    .map(|decoration| (cell.index_path, decoration))
            })
            .collect();

        let all_attributes = header_attributes
            .iter()
            .chain(item_attributes.values())
            .cloned()
            .collect();

        tracing::debug!(
            sections,
            items = item_attributes.len(),
            decorations = decoration_attributes.len(),
            content_height = height,
            "prepared section flow layout"
        );

        self.snapshot = Some(LayoutSnapshot {
            header_attributes,
            item_attributes,
            decoration_attributes,
            all_attributes,
            content_height: height,
            bounds,
        });
        self.prepared_bounds = Some(bounds);
    }

    fn content_size(&self) -> Size {
        self.snapshot.as_ref().map_or(Size::ZERO, |snapshot| {
            Size::new(snapshot.bounds.width(), snapshot.content_height)
        })
    }

    fn attributes_for_elements(&self, rect: Rect) -> Vec<LayoutAttributes> {
        self.last_query_rect.set(Some(rect));
        let Some(snapshot) = &self.snapshot else {
            return Vec::new();
        };

        snapshot
            .all_attributes
            .iter()
            .chain(snapshot.decoration_attributes.values())
            .filter(|attrs| frames_intersect(attrs.frame, rect))
            .cloned()
            .collect()
    }

    fn attributes_for_item(&self, index_path: IndexPath) -> Option<LayoutAttributes> {
        self.snapshot
            .as_ref()?
            .item_attributes
            .get(&index_path)
            .cloned()
    }

    fn attributes_for_supplementary(
        &self,
        kind: SupplementaryKind,
        index_path: IndexPath,
    ) -> Option<LayoutAttributes> {
        self.snapshot
            .as_ref()?
            .header_attributes
            .iter()
            .find(|attrs| {
                attrs.category == ElementCategory::Supplementary(kind)
                    && attrs.index_path == index_path
            })
            .cloned()
    }

    fn attributes_for_decoration(&self, index_path: IndexPath) -> Option<LayoutAttributes> {
        self.snapshot
            .as_ref()?
            .decoration_attributes
            .get(&index_path)
            .cloned()
    }

    fn should_invalidate(&self, new_bounds: Rect) -> bool {
        self.prepared_bounds
            .is_none_or(|bounds| bounds.size() != new_bounds.size())
    }

    fn invalidate(&mut self) {
        self.snapshot = None;
    }
}

fn line_spacing(delegate: Option<&dyn FlowDelegate>, section: usize) -> f64 {
    delegate
        .and_then(|d| d.minimum_line_spacing(section))
        .unwrap_or(0.0)
}

/// Frame anchored at `x = 0, y`. Negative or NaN extents collapse to zero so the origin never
/// moves off the first column.
fn column_frame(y: f64, size: Size) -> Rect {
    Rect::new(0.0, y, size.width.max(0.0), y + size.height.max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
