use super::*;
use crate::{
    animation::component::Curve,
    foundation::error::FlexError,
    modulation::engine::FeatureMode,
};
use serde_json::json;

fn amplitude(m: &Motion, preset: usize) -> f64 {
    match &m.presets()[preset].components[0].curve {
        Curve::Sine { amplitude, .. } => *amplitude,
        other => panic!("unexpected curve {other:?}"),
    }
}

fn sine_params() -> ParameterSet {
    ParameterSet::new()
        .with("target", "height")
        .with("amplitude", 2.0)
}

#[test]
fn motion_without_feature_is_a_single_preset() {
    let out = apply_motion(
        MotionNode::Sine,
        &ModulationConfig::default(),
        &sine_params(),
        Prior::none(),
        None,
        &mut || {},
    )
    .unwrap();
    let motion = out.as_single().unwrap();
    assert_eq!(amplitude(motion, 0), 2.0);
}

#[test]
fn feature_modulates_each_frame() {
    let feature = vec![0.0, 0.5, 1.0];
    let mut ticks = 0;
    let out = apply_motion(
        MotionNode::Sine,
        &ModulationConfig::default(),
        &sine_params(),
        Prior::none(),
        Some(&feature),
        &mut || ticks += 1,
    )
    .unwrap();
    let frames = out.as_frames().unwrap();
    let amps: Vec<f64> = frames.iter().map(|m| amplitude(m, 0)).collect();
    assert_eq!(amps, vec![1.0, 2.0, 3.0]);
    assert_eq!(ticks, 3);
}

#[test]
fn threshold_gates_quiet_frames() {
    let feature = vec![0.1, 0.8];
    let cfg = ModulationConfig {
        feature_threshold: 0.5,
        feature_mode: FeatureMode::Absolute,
        ..ModulationConfig::default()
    };
    let out = apply_motion(
        MotionNode::Sine,
        &cfg,
        &sine_params(),
        Prior::none(),
        Some(&feature),
        &mut || {},
    )
    .unwrap();
    let frames = out.as_frames().unwrap();
    assert_eq!(amplitude(&frames[0], 0), 0.0);
    assert!((amplitude(&frames[1], 0) - 1.6).abs() < 1e-12);
}

#[test]
fn defaults_can_be_modulated() {
    let feature = vec![1.0];
    let cfg = ModulationConfig {
        feature_param: Some("cycles".to_string()),
        feature_mode: FeatureMode::Absolute,
        strength: 3.0,
        ..ModulationConfig::default()
    };
    let out = apply_motion(
        MotionNode::Sine,
        &cfg,
        &ParameterSet::new(),
        Prior::none(),
        Some(&feature),
        &mut || {},
    )
    .unwrap();
    match &out.as_frames().unwrap()[0].presets()[0].components[0].curve {
        Curve::Sine { cycles, .. } => assert_eq!(*cycles, 3.0),
        other => panic!("unexpected curve {other:?}"),
    }
}

#[test]
fn motion_chains_onto_prior_sequence() {
    let first = apply_motion(
        MotionNode::Zoom,
        &ModulationConfig::default(),
        &ParameterSet::new(),
        Prior::none(),
        Some(&vec![0.5; 4]),
        &mut || {},
    )
    .unwrap();
    let second = apply_motion(
        MotionNode::Circle,
        &ModulationConfig::default(),
        &ParameterSet::new(),
        Prior::from_expanded(&first),
        None,
        &mut || {},
    )
    .unwrap();
    let frames = second.as_frames().unwrap();
    assert_eq!(frames.len(), 4);
    for m in frames {
        let names: Vec<&str> = m.presets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zoom", "circle"]);
    }

    let err = apply_motion(
        MotionNode::Circle,
        &ModulationConfig::default(),
        &ParameterSet::new(),
        Prior::from_expanded(&first),
        Some(&vec![0.5; 3]),
        &mut || {},
    )
    .unwrap_err();
    assert!(matches!(err, FlexError::LengthMismatch { .. }));
}

#[test]
fn bad_configuration_fails_before_building() {
    let cfg = ModulationConfig {
        feature_param: Some("depth".to_string()),
        ..ModulationConfig::default()
    };
    let mut ticks = 0;
    let err = apply_motion(
        MotionNode::Sine,
        &cfg,
        &ParameterSet::new(),
        Prior::none(),
        Some(&vec![0.5; 3]),
        &mut || ticks += 1,
    )
    .unwrap_err();
    assert!(matches!(err, FlexError::Validation(_)));
    assert_eq!(ticks, 0);
}

#[test]
fn effects_merge_over_prior_per_frame() {
    let prior = vec![
        EffectsState::from_value(&json!({"vignette_intensity": 5.0, "height": 0.2}))
            .unwrap()
            .unwrap(),
        EffectsState::new(),
    ];
    let feature = vec![0.5, 1.0];
    let cfg = ModulationConfig {
        feature_param: Some("vignette_decay".to_string()),
        ..ModulationConfig::default()
    };
    let out = apply_effect(
        EffectNode::Vignette,
        &cfg,
        &ParameterSet::new().with("vignette_decay", 0.2),
        Prior::Sequence(&prior),
        Some(&feature),
        &mut || {},
    )
    .unwrap();
    let frames = out.as_frames().unwrap();
    assert_eq!(frames[0].get("height"), Some(&json!(0.2)));
    assert_eq!(frames[0].get("vignette_intensity"), Some(&json!(30.0)));
    assert_eq!(frames[0].get("vignette_decay"), Some(&json!(0.2)));
    let decay = frames[1].get("vignette_decay").and_then(Value::as_f64).unwrap();
    assert!((decay - 0.3).abs() < 1e-12);
}

#[test]
fn disabled_modulation_leaves_params_alone() {
    let cfg = ModulationConfig {
        feature_param: Some("None".to_string()),
        feature_mode: FeatureMode::Absolute,
        ..ModulationConfig::default()
    };
    let out = apply_effect(
        EffectNode::Color,
        &cfg,
        &ParameterSet::new(),
        Prior::none(),
        Some(&vec![0.0, 0.0]),
        &mut || {},
    )
    .unwrap();
    for frame in out.as_frames().unwrap() {
        assert_eq!(frame.get("color_saturation"), Some(&json!(100.0)));
    }
}
