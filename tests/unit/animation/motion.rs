use super::*;
use crate::animation::component::Curve;
use serde_json::json;

fn set(target: Target, value: f64) -> Component {
    Component::new(target, Curve::Set { value })
}

#[test]
fn motion_lists_components_in_order() {
    let a = Preset::single(set(Target::Height, 1.0));
    let b = Preset::new(
        "pair",
        vec![set(Target::OffsetX, 2.0), set(Target::OffsetY, 3.0)],
    );
    let m = Motion::Composite(CompositeMotion::from_presets(vec![a, b]));
    let targets: Vec<Target> = m.components().map(|c| c.target).collect();
    assert_eq!(targets, vec![Target::Height, Target::OffsetX, Target::OffsetY]);
    assert_eq!(m.presets().len(), 2);
}

#[test]
fn single_preset_is_named_after_its_curve() {
    let p = Preset::single(set(Target::Zoom, 1.0));
    assert_eq!(p.name, "set");
    assert_eq!(Motion::Preset(p).presets().len(), 1);
}

#[test]
fn from_value_rejects_foreign_shapes() {
    assert!(Motion::from_value(&serde_json::Value::Null).unwrap().is_none());

    let m = Motion::Preset(Preset::single(set(Target::Zoom, 1.0)));
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["type"], "preset");
    assert_eq!(Motion::from_value(&v).unwrap(), Some(m));

    let err = Motion::from_value(&json!({"vignette_enable": true})).unwrap_err();
    assert!(matches!(err, FlexError::Shape(_)));
    assert!(matches!(
        Motion::from_value(&json!(3)).unwrap_err(),
        FlexError::Shape(_)
    ));
}

#[test]
fn target_state_overwrites_or_accumulates() {
    let mut state = TargetState::new();
    let absolute = Motion::Preset(Preset::single(set(Target::Height, 0.5)));
    let step = Motion::Preset(Preset::single(set(Target::OffsetX, 0.25).cumulative(true)));

    state.apply(&absolute, 0.0);
    state.apply(&absolute, 0.5);
    state.apply(&step, 0.0);
    state.apply(&step, 0.5);

    assert_eq!(state.get(Target::Height), Some(0.5));
    assert_eq!(state.get(Target::OffsetX), Some(0.5));
    assert_eq!(state.get(Target::Zoom), None);
    assert_eq!(state.to_map().get("offset_x"), Some(&0.5));
}

#[test]
fn target_state_ignores_nothing_target() {
    let mut state = TargetState::new();
    state.apply_component(&set(Target::Nothing, 9.0), 0.0);
    assert!(state.to_map().is_empty());
}
