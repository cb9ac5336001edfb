//! Depthflex builds camera-motion and post-effect parameters for a 2.5D depth-parallax
//! renderer, optionally modulated frame by frame by an external feature signal.
//!
//! # Pipeline overview
//!
//! 1. **Modulate**: rescale one selected node parameter by the feature value of a frame
//!    ([`ModulationConfig`]).
//! 2. **Build**: turn the parameters into a motion [`Preset`] or flat effect settings
//!    ([`MotionNode`], [`EffectNode`]).
//! 3. **Chain**: append the preset to the prior motion ([`combine`]) or layer the settings
//!    over the prior effects ([`merge`]).
//! 4. **Expand**: run the steps above once, or once per frame, depending on whether a
//!    feature and a per-frame prior are present ([`expand`]).
//!
//! Evaluation is synchronous and holds no state between calls. Rendering and feature
//! extraction live outside this crate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compose;
mod effects;
mod foundation;
mod frames;
mod modulation;
mod nodes;
mod pipeline;

pub use animation::component::{Component, Curve};
pub use animation::motion::{CompositeMotion, Motion, Preset, TargetState};
pub use animation::presets::{CircleParams, DollyParams, OrbitalParams, SwayParams, ZoomParams};
pub use animation::target::Target;
pub use compose::chain::{combine, merge};
pub use effects::state::{EFFECT_KEY_MAP, EffectsState, STATE_GROUP, effect_slot};
pub use foundation::color::{Rgba, parse_color};
pub use foundation::core::{Feature, FeatureSeries, normalized_time};
pub use foundation::error::{FlexError, FlexResult};
pub use foundation::params::ParameterSet;
pub use frames::expand::{Expanded, FrameInput, Prior, expand};
pub use modulation::engine::{
    FEATURE_PARAM_NONE, FeatureMode, ModulationConfig, gate, modulate,
};
pub use nodes::FlexNode;
pub use nodes::effects::{
    ColorParams, DepthOfFieldParams, EffectNode, InpaintParams, VignetteParams,
};
pub use nodes::motion::{
    ArcParams, ExponentialParams, LinearParams, MotionNode, SetTargetParams, WaveParams,
};
pub use pipeline::apply::{apply_effect, apply_motion};
pub use pipeline::spec::{PipelineOutput, PipelineSpec, Stage, sample_targets};
