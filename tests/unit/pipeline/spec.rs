use super::*;
use crate::foundation::error::FlexError;
use serde_json::json;

fn spec(value: Value) -> PipelineSpec {
    serde_json::from_value(value).unwrap()
}

#[test]
fn empty_pipeline_yields_nothing() {
    let out = PipelineSpec::default().run(&mut || {}).unwrap();
    assert!(out.motion.is_none());
    assert!(out.effects.is_none());
    assert!(out.targets.is_empty());
}

#[test]
fn stages_chain_per_frame_over_the_feature() {
    let p = spec(json!({
        "feature": [0.0, 0.5, 1.0],
        "motion": [
            {"node": "zoom", "params": {"intensity": 1.0}},
            {"node": "set_target", "params": {"target": "Focus", "value": 0.4},
             "modulation": {"feature_param": "None"}}
        ],
        "effects": [
            {"node": "vignette"},
            {"node": "dof", "params": {"dof_start": 0.5}}
        ]
    }));
    let mut ticks = 0;
    let out = p.run(&mut || ticks += 1).unwrap();
    assert_eq!(ticks, 12);

    let motion = out.motion.as_ref().unwrap().as_frames().unwrap();
    assert_eq!(motion.len(), 3);
    assert_eq!(motion[2].presets().len(), 2);

    let effects = out.effects.as_ref().unwrap().as_frames().unwrap();
    assert_eq!(effects[0].get("dof_start"), Some(&json!(0.5)));
    assert_eq!(effects[0].get("dof_intensity"), Some(&json!(0.5)));
    assert_eq!(effects[1].get("vignette_intensity"), Some(&json!(30.0)));

    assert_eq!(out.targets.len(), 3);
    assert_eq!(out.targets[1].get("focus"), Some(&0.4));
}

#[test]
fn unmodulated_single_motion_samples_requested_frames() {
    let p = spec(json!({
        "frames": 4,
        "motion": [{"node": "linear", "params": {"target": "offset_x"}}]
    }));
    let out = p.run(&mut || {}).unwrap();
    assert!(out.motion.as_ref().unwrap().is_single());
    let xs: Vec<f64> = out.targets.iter().map(|t| t["offset_x"]).collect();
    assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn stages_can_opt_out_of_the_feature() {
    let p = spec(json!({
        "feature": [0.2, 0.9],
        "effects": [{"node": "color", "modulated": false}]
    }));
    let out = p.run(&mut || {}).unwrap();
    assert!(out.effects.unwrap().is_single());
}

#[test]
fn dynamic_priors_seed_the_chains() {
    let p = spec(json!({
        "prior_effects": [{"height": 0.1}, {"height": 0.2}],
        "effects": [{"node": "inpaint"}]
    }));
    let out = p.run(&mut || {}).unwrap();
    let frames = out.effects.as_ref().unwrap().as_frames().unwrap();
    assert_eq!(frames[1].get("height"), Some(&json!(0.2)));
    assert_eq!(frames[1].get("inpaint_color_g"), Some(&json!(1.0)));

    let grouped = out.grouped_effects().unwrap().into_vec();
    assert_eq!(grouped[0]["state"]["height"], json!(0.1));
    assert_eq!(grouped[0]["inpaint"]["limit"], json!(1.0));
}

#[test]
fn malformed_priors_are_rejected() {
    let p = spec(json!({"prior_effects": 3, "effects": [{"node": "vignette"}]}));
    assert!(matches!(
        p.run(&mut || {}).unwrap_err(),
        FlexError::InvalidEffectsType(_)
    ));

    let p = spec(json!({"prior_motion": {"type": "nope"}}));
    assert!(matches!(p.run(&mut || {}).unwrap_err(), FlexError::Shape(_)));
}

#[test]
fn null_prior_frames_chain_like_no_prior() {
    let p = spec(json!({
        "prior_effects": [{"height": 0.3}, null],
        "effects": [{"node": "vignette"}]
    }));
    let out = p.run(&mut || {}).unwrap();
    let frames = out.effects.as_ref().unwrap().as_frames().unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].get("height"), Some(&json!(0.3)));
    assert_eq!(frames[1].get("height"), None);
    assert_eq!(frames[1].get("vignette_intensity"), Some(&json!(30.0)));

    let p = spec(json!({
        "prior_motion": [
            {"type": "preset", "name": "set", "components": [
                {"target": "height", "curve": {"kind": "set", "value": 1.0}}
            ]},
            null
        ],
        "motion": [{"node": "zoom"}]
    }));
    let out = p.run(&mut || {}).unwrap();
    let motion = out.motion.as_ref().unwrap().as_frames().unwrap();
    assert!(matches!(motion[0], Motion::Composite(_)));
    assert_eq!(motion[0].presets().len(), 2);
    assert!(matches!(motion[1], Motion::Preset(_)));
    assert_eq!(motion[1].presets()[0].name, "zoom");
}

#[test]
fn mismatched_prior_and_feature_fail() {
    let p = spec(json!({
        "feature": [0.1, 0.2, 0.3],
        "prior_effects": [{}, {}],
        "effects": [{"node": "vignette"}]
    }));
    assert!(matches!(
        p.run(&mut || {}).unwrap_err(),
        FlexError::LengthMismatch {
            feature: 3,
            prior: 2
        }
    ));
}

#[test]
fn unknown_node_is_a_validation_error() {
    let p = PipelineSpec::from_json(r#"{"motion": [{"node": "wobble"}]}"#).unwrap();
    assert!(matches!(
        p.run(&mut || {}).unwrap_err(),
        FlexError::Validation(_)
    ));
    assert!(matches!(
        PipelineSpec::from_json("{").unwrap_err(),
        FlexError::Serde(_)
    ));
}
