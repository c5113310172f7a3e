use xs_client::enums::ViewMode;

#[test]
fn get_enum_from_str_valid_values() {
    assert_eq!(
        ViewMode::get_enum_from_str(Some("ongoing")),
        Some(ViewMode::Ongoing)
    );
    assert_eq!(ViewMode::get_enum_from_str(Some("past")), Some(ViewMode::Past));
}

#[test]
fn get_enum_from_str_invalid_and_none() {
    assert_eq!(ViewMode::get_enum_from_str(Some("Ongoing")), None);
    assert_eq!(ViewMode::get_enum_from_str(Some("")), None);
    assert_eq!(ViewMode::get_enum_from_str(None), None);
}

#[test]
fn human_readable_returns_segment_labels() {
    assert_eq!(ViewMode::Ongoing.human_readable(), "Ongoing");
    assert_eq!(ViewMode::Past.human_readable(), "Past");
}

#[test]
fn default_mode_is_ongoing() {
    assert_eq!(ViewMode::default(), ViewMode::Ongoing);
}

#[test]
fn serde_uses_lowercase_values() {
    assert_eq!(
        serde_json::to_string(&ViewMode::Past).unwrap(),
        "\"past\""
    );
    let mode: ViewMode = serde_json::from_str("\"ongoing\"").unwrap();
    assert_eq!(mode, ViewMode::Ongoing);
}
