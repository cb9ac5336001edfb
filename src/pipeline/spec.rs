use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    animation::motion::{Motion, TargetState},
    effects::state::EffectsState,
    foundation::{
        core::{Feature, FeatureSeries, normalized_time},
        error::FlexResult,
        params::ParameterSet,
    },
    frames::expand::{Expanded, Prior},
    modulation::engine::ModulationConfig,
    nodes::{effects::EffectNode, motion::MotionNode},
    pipeline::apply::{apply_effect, apply_motion},
};

/// One node application in a pipeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stage {
    /// Node name, resolved against the motion or effect catalogue.
    pub node: String,
    /// Feature modulation settings.
    #[serde(default)]
    pub modulation: ModulationConfig,
    /// Node parameters; missing ones take the node defaults.
    #[serde(default)]
    pub params: ParameterSet,
    /// Whether this stage sees the pipeline feature. Defaults to `true`.
    #[serde(default = "default_true")]
    pub modulated: bool,
}

fn default_true() -> bool {
    true
}

/// JSON description of a chain of motion and effect stages.
///
/// Stages run in order; each stage's output is the prior of the next. `prior_motion` and
/// `prior_effects` seed the chains and may be `null`, one value, or one value per frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PipelineSpec {
    /// Per-frame feature values in `[0, 1]`.
    pub feature: Option<FeatureSeries>,
    /// Frames sampled for a single, frame-less motion. Defaults to 1.
    pub frames: Option<usize>,
    /// Motion the first motion stage chains onto.
    pub prior_motion: Value,
    /// Effects the first effect stage layers over.
    pub prior_effects: Value,
    /// Motion stages, in order.
    pub motion: Vec<Stage>,
    /// Effect stages, in order.
    pub effects: Vec<Stage>,
}

/// Result of [`PipelineSpec::run`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PipelineOutput {
    /// Motion after the last stage; `None` with no stages and no prior.
    pub motion: Option<Expanded<Motion>>,
    /// Effects after the last stage; `None` with no stages and no prior.
    pub effects: Option<Expanded<EffectsState>>,
    /// Sampled target values per frame, keyed by target id.
    pub targets: Vec<BTreeMap<&'static str, f64>>,
}

impl PipelineOutput {
    /// Effects projected onto renderer groups.
    pub fn grouped_effects(
        &self,
    ) -> Option<Expanded<BTreeMap<String, BTreeMap<String, Value>>>> {
        self.effects
            .clone()
            .map(|effects| effects.map(|state| state.grouped()))
    }
}

impl PipelineSpec {
    /// Parse a pipeline description.
    pub fn from_json(json: &str) -> FlexResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run every stage, reporting progress once per produced frame.
    #[tracing::instrument(skip_all, fields(motion = self.motion.len(), effects = self.effects.len()))]
    pub fn run(&self, progress: &mut dyn FnMut()) -> FlexResult<PipelineOutput> {
        let feature = self.feature.as_ref().map(|f| f as &dyn Feature);

        let mut motion = decode_prior(&self.prior_motion, Motion::from_value)?;
        for stage in &self.motion {
            let node = MotionNode::from_name(&stage.node)?;
            let prior = prior_of(motion.as_ref());
            let out = apply_motion(
                node,
                &stage.modulation,
                &stage.params,
                prior,
                stage_feature(stage, feature),
                progress,
            )?;
            motion = Some(out);
        }

        let mut effects = decode_prior(&self.prior_effects, EffectsState::from_value)?;
        for stage in &self.effects {
            let node = EffectNode::from_name(&stage.node)?;
            let prior = prior_of(effects.as_ref());
            let out = apply_effect(
                node,
                &stage.modulation,
                &stage.params,
                prior,
                stage_feature(stage, feature),
                progress,
            )?;
            effects = Some(out);
        }

        let targets = match &motion {
            Some(m) => sample_targets(m, self.frames.unwrap_or(1)),
            None => Vec::new(),
        };
        tracing::debug!(frames = targets.len(), "pipeline finished");

        Ok(PipelineOutput {
            motion,
            effects,
            targets,
        })
    }
}

fn stage_feature<'a>(
    stage: &Stage,
    feature: Option<&'a dyn Feature>,
) -> Option<&'a dyn Feature> {
    if stage.modulated { feature } else { None }
}

fn prior_of<T>(expanded: Option<&Expanded<T>>) -> Prior<'_, T> {
    match expanded {
        Some(e) => Prior::from_expanded(e),
        None => Prior::none(),
    }
}

/// `null` gives no prior, an array one prior per frame, anything else a single prior.
///
/// A `null` frame inside the array decodes to the empty value, which chains like no
/// prior for that frame.
fn decode_prior<T: Default>(
    value: &Value,
    decode: impl Fn(&Value) -> FlexResult<Option<T>>,
) -> FlexResult<Option<Expanded<T>>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => {
            let frames = items
                .iter()
                .map(|item| decode(item).map(Option::unwrap_or_default))
                .collect::<FlexResult<Vec<T>>>()?;
            Ok(Some(Expanded::Frames(frames)))
        }
        other => Ok(decode(other)?.map(Expanded::Single)),
    }
}

/// Sample a motion frame by frame with one running [`TargetState`].
///
/// Per-frame motions sample frame `i` at `i / n`; a single motion is sampled over
/// `frames` frames.
pub fn sample_targets(
    motion: &Expanded<Motion>,
    frames: usize,
) -> Vec<BTreeMap<&'static str, f64>> {
    let mut state = TargetState::new();
    match motion {
        Expanded::Single(m) => (0..frames)
            .map(|i| {
                state.apply(m, normalized_time(i, frames));
                state.to_map()
            })
            .collect(),
        Expanded::Frames(ms) => {
            let n = ms.len();
            ms.iter()
                .enumerate()
                .map(|(i, m)| {
                    state.apply(m, normalized_time(i, n));
                    state.to_map()
                })
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/spec.rs"]
mod tests;
