use super::*;

fn registry() -> ViewRegistry {
    let mut registry = ViewRegistry::default();
    registry.register_cell("PlainCell", "Cell");
    registry.register_cell_classes(&["LabelCell"]);
    registry.register_supplementary("HeaderView", SupplementaryKind::Header);
    registry.register_decoration("SectionBackgroundView");
    registry
}

#[test]
fn registered_views_dequeue_with_their_class() {
    let registry = registry();
    let p = IndexPath::new(1, 2);

    let cell = registry.dequeue_cell("Cell", p);
    assert_eq!(cell.class, "PlainCell");
    assert_eq!(cell.role, ViewRole::Cell);
    assert_eq!(cell.index_path, p);

    let typed = registry.dequeue_cell_of("LabelCell", p);
    assert_eq!(typed.reuse_identifier, "LabelCell");

    let header = registry.dequeue_supplementary(SupplementaryKind::Header, "HeaderView", p);
    assert_eq!(header.role, ViewRole::Supplementary(SupplementaryKind::Header));

    assert!(registry.is_decoration_registered("SectionBackgroundView"));
    assert!(!registry.is_decoration_registered("Other"));
}

#[test]
fn section_background_takes_decoration_color() {
    let registry = registry();
    let p = IndexPath::new(0, 0);
    let mut view = registry.dequeue_decoration("SectionBackgroundView", p);
    let frame = Rect::new(0.0, 10.0, 320.0, 70.0);

    view.apply(&LayoutAttributes::for_decoration(
        "SectionBackgroundView",
        p,
        frame,
        Color::RED,
    ));
    assert_eq!(view.background, Color::RED);
    assert_eq!(view.frame, frame);

    let mut plain = LayoutAttributes::for_cell(p, frame);
    plain.z_index = -1;
    view.apply(&plain);
    assert_eq!(view.background, Color::WHITE);
    assert_eq!(view.z_index, -1);
}

#[test]
fn cells_ignore_decoration_color() {
    let registry = registry();
    let p = IndexPath::new(0, 0);
    let mut cell = registry.dequeue_cell("Cell", p);
    cell.background = Color::WHITE;
    cell.apply(&LayoutAttributes::for_decoration(
        "SectionBackgroundView",
        p,
        Rect::new(0.0, 0.0, 1.0, 1.0),
        Color::BLUE,
    ));
    assert_eq!(cell.background, Color::WHITE);
}

#[test]
#[should_panic(expected = "no cell registered")]
fn unregistered_cell_is_fatal() {
    registry().dequeue_cell("Missing", IndexPath::new(0, 0));
}

#[test]
#[should_panic(expected = "could not dequeue cell of type")]
fn mismatched_cell_class_is_fatal() {
    let mut registry = registry();
    registry.register_cell("PlainCell", "LabelCell");
    registry.dequeue_cell_of("LabelCell", IndexPath::new(0, 0));
}

#[test]
#[should_panic(expected = "could not dequeue supplementary view of kind section-header")]
fn unregistered_supplementary_kind_is_fatal() {
    registry().dequeue_supplementary(
        SupplementaryKind::SectionHeader,
        "HeaderView",
        IndexPath::new(0, 0),
    );
}

#[test]
#[should_panic(expected = "no decoration view registered")]
fn unregistered_decoration_is_fatal() {
    registry().dequeue_decoration("Unknown", IndexPath::new(0, 0));
}
