use crate::{
    foundation::core::IndexPath,
    foundation::error::LayoutResult,
    host::batch::BatchSummary,
    host::collection::{CollectionHost, DataSource},
    layout::attributes::SupplementaryKind,
    layout::delegate::HeaderTemplate,
    layout::engine::SectionFlowLayout,
    screen::config::ScreenConfig,
    screen::data::{
        CELL_CLASS, CELL_REUSE_IDENTIFIER, HeaderView, SECTION_HEADER_CLASS, Side,
        ToggleDataSource,
    },
    sections::policy::SectionPolicy,
};

/// Host type driven by the sample screen.
pub type ScreenHost<S> = CollectionHost<ToggleDataSource<S>, SectionFlowLayout<S, HeaderView>>;

/// Sample screen: shows one of two buckets and swaps them with a batch delete/insert.
#[derive(Debug)]
pub struct ScreenController<S> {
    host: ScreenHost<S>,
}

impl<S: SectionPolicy> ScreenController<S> {
    /// Build the screen from a validated configuration and register its views.
    pub fn new(config: &ScreenConfig) -> LayoutResult<Self> {
        config.validate()?;
        let layout = SectionFlowLayout::new(HeaderView::new(config.header_height));
        let host = CollectionHost::new(
            ToggleDataSource::from_config(config),
            layout,
            config.viewport.bounds(),
        );
        let mut controller = Self { host };
        controller.load(config.section_headers);
        Ok(controller)
    }

    fn load(&mut self, section_headers: bool) {
        let registry = self.host.registry_mut();
        registry.register_cell(CELL_CLASS, CELL_REUSE_IDENTIFIER);
        registry.register_supplementary(HeaderView::TYPE_NAME, SupplementaryKind::Header);
        registry.register_supplementary(SECTION_HEADER_CLASS, SupplementaryKind::SectionHeader);
        self.host
            .configure_layout(|layout| layout.set_has_section_headers(section_headers));
    }

    /// Render host of the screen.
    pub fn host(&self) -> &ScreenHost<S> {
        &self.host
    }

    /// Mutable render host, for viewport changes and rendering.
    pub fn host_mut(&mut self) -> &mut ScreenHost<S> {
        &mut self.host
    }

    /// Bucket currently displayed.
    pub fn current_side(&self) -> Side {
        self.host.data_source().current_side()
    }

    /// Swap the displayed bucket in one batch transaction.
    ///
    /// Deleted paths come from the counts on screen before the swap, inserted paths from the
    /// data source after it. The two sets are independent and usually differ in size.
    #[tracing::instrument(skip(self), fields(from = ?self.current_side()))]
    pub fn toggle(&mut self) -> LayoutResult<BatchSummary> {
        self.host.perform_batch_updates(|batch| {
            let existing = index_paths::<S>(|section| batch.number_of_items(section));
            let side = batch.data_source_mut().switch_side();
            let source = batch.data_source();
            let new = index_paths::<S>(|section| source.number_of_items(section));

            tracing::debug!(
                ?side,
                existing = existing.len(),
                new = new.len(),
                "swapping data set"
            );

            batch.delete_items(existing);
            batch.insert_items(new);
        })
    }
}

fn index_paths<S: SectionPolicy>(items_in: impl Fn(usize) -> usize) -> Vec<IndexPath> {
    S::ALL
        .iter()
        .flat_map(|section| {
            let section = section.ordinal();
            (0..items_in(section)).map(move |item| IndexPath::new(section, item))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/screen/controller.rs"]
mod tests;
