use super::*;

#[test]
fn series_deserializes_from_array_and_object() {
    let a: FeatureSeries = serde_json::from_str("[0.0, 0.5, 1.0]").unwrap();
    assert_eq!(a.frame_count(), 3);
    assert_eq!(a.value_at(1), 0.5);

    let b: FeatureSeries = serde_json::from_str(r#"{"values": [0.25]}"#).unwrap();
    assert_eq!(b.values(), &[0.25]);
}

#[test]
fn series_rejects_non_finite_values() {
    let err = FeatureSeries::new(vec![0.0, f64::NAN]).unwrap_err();
    assert!(err.to_string().contains("frame 1"));
}

#[test]
fn slices_and_references_are_features() {
    let v = vec![0.1, 0.2];
    let r: &dyn Feature = &v;
    assert_eq!(r.frame_count(), 2);
    assert_eq!((&v).value_at(1), 0.2);
    assert_eq!(v.as_slice().value_at(7), 0.0);
}

#[test]
fn normalized_time_wraps_at_one() {
    assert_eq!(normalized_time(0, 0), 0.0);
    assert_eq!(normalized_time(0, 1), 0.0);
    assert_eq!(normalized_time(0, 4), 0.0);
    assert_eq!(normalized_time(2, 4), 0.5);
    assert_eq!(normalized_time(3, 4), 0.75);
    assert_eq!(normalized_time(9, 4), 0.75);
}
