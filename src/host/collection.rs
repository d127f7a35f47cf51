use crate::{
    foundation::core::{IndexPath, Point, Rect, Size},
    foundation::error::LayoutResult,
    host::batch::{BatchSummary, BatchUpdate, validate_batch},
    host::registry::{ReusableView, ViewRegistry},
    layout::attributes::{ElementCategory, SupplementaryKind},
    layout::delegate::{FlowDelegate, LayoutHost},
    layout::engine::CollectionLayout,
};

/// Supplies counts and view content to a [`CollectionHost`].
pub trait DataSource {
    /// Number of sections to display.
    fn number_of_sections(&self) -> usize;

    /// Number of items in `section`.
    fn number_of_items(&self, section: usize) -> usize;

    /// Dequeue and configure the cell for `index_path`.
    fn cell_for_item(&self, registry: &ViewRegistry, index_path: IndexPath) -> ReusableView;

    /// Dequeue and configure the supplementary view of `kind` at `index_path`.
    fn view_for_supplementary(
        &self,
        registry: &ViewRegistry,
        kind: SupplementaryKind,
        index_path: IndexPath,
    ) -> ReusableView;

    /// Sizing delegate consulted by the layout.
    fn flow_delegate(&self) -> Option<&dyn FlowDelegate> {
        None
    }
}

/// Render host: owns the viewport, the data source and the layout, and turns layout attributes
/// into positioned views.
#[derive(Debug)]
pub struct CollectionHost<D, L> {
    data_source: D,
    layout: L,
    registry: ViewRegistry,
    bounds: Rect,
    needs_layout: bool,
}

/// Borrowed view of the host that the layout prepares against.
struct HostView<'a, D> {
    data_source: &'a D,
    bounds: Rect,
}

impl<D: DataSource> LayoutHost for HostView<'_, D> {
    fn number_of_sections(&self) -> usize {
        self.data_source.number_of_sections()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.data_source.number_of_items(section)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn delegate(&self) -> Option<&dyn FlowDelegate> {
        self.data_source.flow_delegate()
    }
}

impl<D: DataSource, L: CollectionLayout> CollectionHost<D, L> {
    /// Create a host showing `data_source` through `layout` in a viewport of `bounds`.
    pub fn new(data_source: D, layout: L, bounds: Rect) -> Self {
        Self {
            data_source,
            layout,
            registry: ViewRegistry::default(),
            bounds,
            needs_layout: true,
        }
    }

    /// Data source.
    pub fn data_source(&self) -> &D {
        &self.data_source
    }

    /// Layout engine.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Reconfigure the layout; the current attributes are invalidated.
    pub fn configure_layout(&mut self, configure: impl FnOnce(&mut L)) {
        configure(&mut self.layout);
        self.invalidate_layout();
    }

    /// View registrations.
    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    /// Mutable view registrations.
    pub fn registry_mut(&mut self) -> &mut ViewRegistry {
        &mut self.registry
    }

    /// Viewport bounds; the origin is the scroll offset.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the next query will prepare the layout first.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Number of sections currently reported by the data source.
    pub fn number_of_sections(&self) -> usize {
        self.data_source.number_of_sections()
    }

    /// Number of items currently reported by the data source for `section`.
    pub fn number_of_items(&self, section: usize) -> usize {
        self.data_source.number_of_items(section)
    }

    /// Move or resize the viewport, invalidating the layout when it asks for it.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.layout.should_invalidate(bounds) {
            tracing::debug!(?bounds, "viewport change invalidates layout");
            self.invalidate_layout();
        }
        self.bounds = bounds;
    }

    /// Scroll the viewport so its top edge sits at `offset_y`.
    pub fn scroll_to(&mut self, offset_y: f64) {
        let bounds = self
            .bounds
            .with_origin(Point::new(self.bounds.x0, offset_y));
        self.set_bounds(bounds);
    }

    /// Drop the layout's attributes; they are recomputed on the next query.
    pub fn invalidate_layout(&mut self) {
        self.layout.invalidate();
        self.needs_layout = true;
    }

    /// Register the layout's decoration kind and prepare it if invalidated.
    pub fn layout_if_needed(&mut self) {
        if !self.needs_layout {
            return;
        }
        self.registry
            .register_decoration(self.layout.decoration_kind());
        let view = HostView {
            data_source: &self.data_source,
            bounds: self.bounds,
        };
        self.layout.prepare(&view);
        self.needs_layout = false;
    }

    /// Scrollable content size.
    pub fn content_size(&mut self) -> Size {
        self.layout_if_needed();
        self.layout.content_size()
    }

    /// Views for every element intersecting the viewport, in painter's order.
    pub fn visible_views(&mut self) -> Vec<ReusableView> {
        let bounds = self.bounds;
        self.views_in(bounds)
    }

    /// Views for every element intersecting `rect`, in painter's order.
    pub fn views_in(&mut self, rect: Rect) -> Vec<ReusableView> {
        self.layout_if_needed();
        let mut views: Vec<ReusableView> = self
            .layout
            .attributes_for_elements(rect)
            .iter()
            .map(|attributes| {
                let mut view = match attributes.category {
                    ElementCategory::Cell => self
                        .data_source
                        .cell_for_item(&self.registry, attributes.index_path),
                    ElementCategory::Supplementary(kind) => self.data_source.view_for_supplementary(
                        &self.registry,
                        kind,
                        attributes.index_path,
                    ),
                    ElementCategory::Decoration(kind) => self
                        .registry
                        .dequeue_decoration(kind, attributes.index_path),
                };
                view.apply(attributes);
                view
            })
            .collect();
        views.sort_by_key(|view| view.z_index);
        views
    }

    /// Apply a batch of data mutations with their deletions and insertions as one transaction.
    ///
    /// The closure sees pre-transaction counts through [`BatchUpdate`]. The layout is
    /// invalidated and prepared again only after the closure returns, so no interim layout
    /// mixes old and new counts. If the recorded changes do not reconcile with the data source,
    /// the host still lays out the new data and the error is returned.
    #[tracing::instrument(skip(self, updates))]
    pub fn perform_batch_updates<F>(&mut self, updates: F) -> LayoutResult<BatchSummary>
    where
        F: FnOnce(&mut BatchUpdate<'_, D>),
    {
        self.layout_if_needed();
        let before = self.section_counts();

        let (deleted, inserted) = {
            let mut batch = BatchUpdate::new(&mut self.data_source, &before);
            updates(&mut batch);
            batch.into_parts()
        };

        let after = self.section_counts();
        let validation = validate_batch(&before, &after, &deleted, &inserted);

        let disappearing = deleted
            .iter()
            .filter_map(|path| self.layout.attributes_for_item(*path))
            .collect();

        self.invalidate_layout();
        self.layout_if_needed();

        if let Err(err) = validation {
            tracing::warn!(%err, "batch update did not reconcile with the data source");
            return Err(err);
        }

        let appearing = inserted
            .iter()
            .filter_map(|path| self.layout.attributes_for_item(*path))
            .collect();

        tracing::debug!(
            deleted = deleted.len(),
            inserted = inserted.len(),
            "applied batch update"
        );

        Ok(BatchSummary {
            deleted,
            inserted,
            disappearing,
            appearing,
        })
    }

    fn section_counts(&self) -> Vec<usize> {
        (0..self.data_source.number_of_sections())
            .map(|section| self.data_source.number_of_items(section))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/collection.rs"]
mod tests;
