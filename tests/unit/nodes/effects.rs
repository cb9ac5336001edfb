use super::*;
use serde_json::json;

#[test]
fn every_node_resolves_by_name() {
    for node in EffectNode::ALL {
        assert_eq!(EffectNode::from_name(node.name()).unwrap(), node);
        assert_eq!(node.modifiable_params().last(), Some(&"None"));
    }
    assert_eq!(
        EffectNode::from_name("DOF").unwrap(),
        EffectNode::DepthOfField
    );
    assert!(EffectNode::from_name("bloom").is_err());
}

#[test]
fn vignette_defaults() {
    let out = EffectNode::Vignette.build(&ParameterSet::new()).unwrap();
    assert_eq!(out["vignette_enable"], json!(true));
    assert_eq!(out["vignette_intensity"], json!(30.0));
    assert_eq!(out["vignette_decay"], json!(0.1));
    assert_eq!(out.len(), 3);
}

#[test]
fn depth_of_field_rounds_counts() {
    let params = ParameterSet::new()
        .with("dof_quality", 4.6)
        .with("dof_directions", 11.2);
    let out = EffectNode::DepthOfField.build(&params).unwrap();
    assert_eq!(out["dof_quality"], json!(5));
    assert_eq!(out["dof_directions"], json!(11));
    assert_eq!(out["dof_start"], json!(0.6));
}

#[test]
fn inpaint_decodes_color_literal() {
    let params = ParameterSet::new().with("inpaint_color", "255,0,0,255");
    let out = EffectNode::Inpaint.build(&params).unwrap();
    assert_eq!(out["inpaint_color_r"], json!(1.0));
    assert_eq!(out["inpaint_color_g"], json!(0.0));
    assert_eq!(out["inpaint_color_a"], json!(1.0));
    assert!(!out.contains_key("inpaint_color"));
}

#[test]
fn inpaint_falls_back_to_green() {
    let params = ParameterSet::new().with("inpaint_color", "#GGGGGG");
    let out = EffectNode::Inpaint.build(&params).unwrap();
    assert_eq!(out["inpaint_color_r"], json!(0.0));
    assert_eq!(out["inpaint_color_g"], json!(1.0));
    assert_eq!(out["inpaint_color_b"], json!(0.0));
    assert_eq!(out["inpaint_color_a"], json!(1.0));
}

#[test]
fn inpaint_non_string_color_falls_back_to_green() {
    for color in [json!(5), json!(true), json!([255, 0, 0]), json!(null)] {
        let params = ParameterSet::new().with("inpaint_color", color);
        let out = EffectNode::Inpaint.build(&params).unwrap();
        assert_eq!(out["inpaint_color_r"], json!(0.0));
        assert_eq!(out["inpaint_color_g"], json!(1.0));
        assert_eq!(out["inpaint_color_b"], json!(0.0));
        assert_eq!(out["inpaint_color_a"], json!(1.0));
    }
}

#[test]
fn color_overrides_keep_other_defaults() {
    let params = ParameterSet::new().with("color_sepia", 40.0);
    let out = EffectNode::Color.build(&params).unwrap();
    assert_eq!(out["color_sepia"], json!(40.0));
    assert_eq!(out["color_gamma"], json!(100.0));
    assert_eq!(out["color_enable"], json!(true));
}

#[test]
fn resolved_params_expose_modifiable_numbers() {
    for node in EffectNode::ALL {
        let full = node.resolve_params(&ParameterSet::new()).unwrap();
        for name in node.modifiable_params() {
            if *name != "None" {
                assert!(full.number(name).is_some(), "{} lacks {name}", node.name());
            }
        }
    }
}
