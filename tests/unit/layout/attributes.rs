use super::*;

#[test]
fn supplementary_identifiers_round_trip() {
    for kind in SupplementaryKind::ALL {
        assert_eq!(SupplementaryKind::from_identifier(kind.identifier()), Some(kind));
    }
    assert_eq!(SupplementaryKind::Header.identifier(), "header");
    assert_eq!(SupplementaryKind::from_identifier("sticky-footer"), None);
}

#[test]
fn element_kinds_follow_category() {
    let frame = Rect::new(0.0, 0.0, 10.0, 10.0);
    let p = IndexPath::new(0, 0);
    assert_eq!(LayoutAttributes::for_cell(p, frame).element_kind(), "cell");
    assert_eq!(
        LayoutAttributes::for_supplementary(SupplementaryKind::Header, p, frame).element_kind(),
        "globalHeader"
    );
    assert_eq!(
        LayoutAttributes::for_supplementary(SupplementaryKind::SectionHeader, p, frame)
            .element_kind(),
        "sectionHeader"
    );
    assert_eq!(
        LayoutAttributes::for_supplementary(SupplementaryKind::SectionFooter, p, frame)
            .element_kind(),
        "sectionFooter"
    );
    assert_eq!(
        LayoutAttributes::for_decoration("bg", p, frame, Color::RED).element_kind(),
        "decoration"
    );
}

#[test]
fn equality_takes_color_into_account() {
    let frame = Rect::new(0.0, 10.0, 320.0, 60.0);
    let p = IndexPath::new(1, 0);
    let red = LayoutAttributes::for_decoration("bg", p, frame, Color::RED);
    let green = LayoutAttributes::for_decoration("bg", p, frame, Color::GREEN);
    assert_ne!(red, green);
    assert_eq!(red, red.clone());
}

#[test]
fn only_decorations_carry_color() {
    let frame = Rect::new(0.0, 0.0, 10.0, 10.0);
    let cell = LayoutAttributes::for_cell(IndexPath::new(0, 1), frame);
    assert!(cell.is_cell());
    assert_eq!(cell.color, None);

    let json = serde_json::to_value(&cell).unwrap();
    assert!(json.get("color").is_none());
    assert_eq!(json["index_path"]["item"], 1);
}
