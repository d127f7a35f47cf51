use super::*;
use crate::{
    Color, ConcreteSections, HeaderTemplate, LayoutError, SectionFlowLayout, ViewRole,
};

#[derive(Debug)]
struct FixedHeader;

impl HeaderTemplate for FixedHeader {
    const TYPE_NAME: &'static str = "FixedHeader";

    fn natural_height(&self) -> Option<f64> {
        Some(40.0)
    }
}

#[derive(Debug)]
struct Counts(Vec<usize>);

impl FlowDelegate for Counts {
    fn size_for_item(&self, viewport_width: f64, _index_path: IndexPath) -> Option<Size> {
        Some(Size::new(viewport_width, 50.0))
    }

    fn reference_size_for_header(&self, viewport_width: f64, _section: usize) -> Option<Size> {
        Some(Size::new(viewport_width, 20.0))
    }

    fn minimum_line_spacing(&self, _section: usize) -> Option<f64> {
        Some(10.0)
    }
}

impl DataSource for Counts {
    fn number_of_sections(&self) -> usize {
        self.0.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.0[section]
    }

    fn cell_for_item(&self, registry: &ViewRegistry, index_path: IndexPath) -> ReusableView {
        let mut cell = registry.dequeue_cell("Cell", index_path);
        cell.background = Color::WHITE;
        cell
    }

    fn view_for_supplementary(
        &self,
        registry: &ViewRegistry,
        kind: SupplementaryKind,
        index_path: IndexPath,
    ) -> ReusableView {
        registry.dequeue_supplementary(kind, FixedHeader::TYPE_NAME, index_path)
    }

    fn flow_delegate(&self) -> Option<&dyn FlowDelegate> {
        Some(self)
    }
}

type Host = CollectionHost<Counts, SectionFlowLayout<ConcreteSections, FixedHeader>>;

fn host(counts: &[usize]) -> Host {
    let layout = SectionFlowLayout::new(FixedHeader).with_section_headers(false);
    let mut host = CollectionHost::new(
        Counts(counts.to_vec()),
        layout,
        Rect::new(0.0, 0.0, 320.0, 240.0),
    );
    host.registry_mut().register_cell("PlainCell", "Cell");
    host.registry_mut()
        .register_supplementary(FixedHeader::TYPE_NAME, SupplementaryKind::Header);
    host
}

#[test]
fn first_query_prepares_and_registers_decoration_kind() {
    let mut host = host(&[2, 1, 0]);
    assert!(host.needs_layout());
    assert!(host.layout().snapshot().is_none());

    assert_eq!(host.content_size(), Size::new(320.0, 40.0 + 3.0 * 60.0));
    assert!(!host.needs_layout());
    assert!(
        host.registry()
            .is_decoration_registered(crate::SECTION_BACKGROUND_KIND)
    );
}

#[test]
fn visible_views_are_positioned_and_painted() {
    let mut host = host(&[2, 1, 0]);
    let views = host.visible_views();

    // Header, three cells and three backgrounds all fit in the 240pt viewport.
    assert_eq!(views.len(), 7);
    let first = views.first().unwrap();
    assert_eq!(first.role, ViewRole::SectionBackground);
    assert_eq!(first.z_index, -1);

    let background = views
        .iter()
        .find(|v| v.role == ViewRole::SectionBackground && v.index_path == IndexPath::new(1, 0))
        .unwrap();
    assert_eq!(background.background, Color::GREEN);
    assert_eq!(background.frame, Rect::new(0.0, 160.0, 320.0, 220.0));

    let cell = views
        .iter()
        .find(|v| v.role == ViewRole::Cell && v.index_path == IndexPath::new(0, 1))
        .unwrap();
    assert_eq!(cell.background, Color::WHITE);
    assert_eq!(cell.frame.y0, 100.0);
}

#[test]
fn scrolling_keeps_layout_and_resizing_invalidates() {
    let mut host = host(&[5, 0, 0]);
    host.layout_if_needed();

    host.scroll_to(120.0);
    assert!(!host.needs_layout());
    assert_eq!(host.bounds().y0, 120.0);
    let views = host.visible_views();
    assert!(views.iter().all(|v| v.frame.y1 > 120.0));

    host.set_bounds(Rect::new(0.0, 0.0, 480.0, 320.0));
    assert!(host.needs_layout());
    assert!(host.layout().snapshot().is_none());
    assert_eq!(host.content_size().width, 480.0);
}

#[test]
fn configuring_the_layout_invalidates_it() {
    let mut host = host(&[1, 1, 0]);
    assert_eq!(host.content_size().height, 160.0);

    host.configure_layout(|layout| layout.set_has_section_headers(true));
    assert!(host.needs_layout());
    assert_eq!(host.content_size().height, 200.0);
}

#[test]
fn batch_update_reprepares_after_the_transaction() {
    let mut host = host(&[7, 0, 0]);
    assert!(host.layout().snapshot().is_none());

    let summary = host
        .perform_batch_updates(|batch| {
            let existing: Vec<_> = (0..batch.number_of_items(0))
                .map(|item| IndexPath::new(0, item))
                .collect();
            batch.data_source_mut().0[0] = 3;
            assert_eq!(batch.number_of_items(0), 7);
            batch.delete_items(existing);
            batch.insert_items((0..3).map(|item| IndexPath::new(0, item)));
        })
        .unwrap();

    assert_eq!(summary.deleted.len(), 7);
    assert_eq!(summary.inserted.len(), 3);
    assert_eq!(summary.disappearing.len(), 7);
    assert_eq!(summary.appearing.len(), 3);
    assert_eq!(summary.disappearing[6].frame.y0, 40.0 + 6.0 * 60.0);

    assert!(!host.needs_layout());
    assert_eq!(host.number_of_items(0), 3);
    let snapshot = host.layout().snapshot().unwrap();
    assert_eq!(snapshot.item_attributes().len(), 3);
    assert_eq!(snapshot.content_height(), 40.0 + 3.0 * 60.0);
}

#[test]
fn unreconciled_batch_errors_but_shows_new_data() {
    let mut host = host(&[2, 0, 0]);
    let err = host
        .perform_batch_updates(|batch| {
            batch.data_source_mut().0[0] = 3;
            batch.insert_items([IndexPath::new(0, 2)]);
            batch.insert_items([IndexPath::new(0, 1)]);
        })
        .unwrap_err();
    assert!(matches!(err, LayoutError::BatchUpdate(_)));

    assert!(!host.needs_layout());
    assert!(
        host.layout()
            .attributes_for_item(IndexPath::new(0, 2))
            .is_some()
    );
}

#[test]
#[should_panic(expected = "could not dequeue supplementary view")]
fn rendering_an_unregistered_header_is_fatal() {
    let layout = SectionFlowLayout::<ConcreteSections, _>::new(FixedHeader);
    let mut host = CollectionHost::new(
        Counts(vec![1, 0, 0]),
        layout,
        Rect::new(0.0, 0.0, 320.0, 240.0),
    );
    host.registry_mut().register_cell("PlainCell", "Cell");
    host.visible_views();
}
