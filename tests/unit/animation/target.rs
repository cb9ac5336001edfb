use super::*;
use std::str::FromStr;

#[test]
fn parses_names_and_ids() {
    assert_eq!(Target::from_str("OffsetX").unwrap(), Target::OffsetX);
    assert_eq!(Target::from_str("offset_x").unwrap(), Target::OffsetX);
    assert_eq!(Target::from_str(" height ").unwrap(), Target::Height);
    assert!(Target::from_str("OffsetZ").is_err());
}

#[test]
fn serde_uses_renderer_ids_and_accepts_names() {
    assert_eq!(
        serde_json::to_value(Target::CenterY).unwrap(),
        serde_json::json!("center_y")
    );
    let t: Target = serde_json::from_value(serde_json::json!("CenterY")).unwrap();
    assert_eq!(t, Target::CenterY);
}

#[test]
fn ids_round_trip_through_from_str() {
    for t in Target::ALL {
        assert_eq!(Target::from_str(t.id()).unwrap(), t);
        assert_eq!(t.to_string(), t.name());
    }
}
