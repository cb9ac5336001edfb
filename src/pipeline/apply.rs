use serde_json::Value;

use crate::{
    animation::motion::Motion,
    compose::chain::{combine, merge},
    effects::state::EffectsState,
    foundation::{core::Feature, error::FlexResult, params::ParameterSet},
    frames::expand::{Expanded, Prior, expand},
    modulation::engine::ModulationConfig,
    nodes::{FlexNode, effects::EffectNode, motion::MotionNode},
};

/// Apply a motion node on top of `prior`, once or once per frame.
///
/// Each produced item is the prior chain with the node's preset appended.
#[tracing::instrument(skip_all, fields(node = node.name()))]
pub fn apply_motion(
    node: MotionNode,
    config: &ModulationConfig,
    params: &ParameterSet,
    prior: Prior<'_, Motion>,
    feature: Option<&dyn Feature>,
    progress: &mut dyn FnMut(),
) -> FlexResult<Expanded<Motion>> {
    apply_node(&node, config, params, prior, feature, progress, |prior, preset| {
        Ok(combine(prior, preset))
    })
}

/// Apply an effect node on top of `prior`, once or once per frame.
///
/// Each produced item is the prior effects with the node's keys overwritten.
#[tracing::instrument(skip_all, fields(node = node.name()))]
pub fn apply_effect(
    node: EffectNode,
    config: &ModulationConfig,
    params: &ParameterSet,
    prior: Prior<'_, EffectsState>,
    feature: Option<&dyn Feature>,
    progress: &mut dyn FnMut(),
) -> FlexResult<Expanded<EffectsState>> {
    apply_node(&node, config, params, prior, feature, progress, |prior, entries| {
        merge(prior, &Value::Object(entries))
    })
}

fn apply_node<N, T, C>(
    node: &N,
    config: &ModulationConfig,
    params: &ParameterSet,
    prior: Prior<'_, T>,
    feature: Option<&dyn Feature>,
    progress: &mut dyn FnMut(),
    chain: C,
) -> FlexResult<Expanded<T>>
where
    N: FlexNode,
    C: Fn(Option<&T>, N::Output) -> FlexResult<T>,
{
    config.validate()?;
    let modifiable = node.modifiable_params();
    // Reject a bad feature_param before any frame is built.
    config.resolve_param(modifiable)?;
    let base = node.resolve_params(params)?;

    expand(prior, feature, progress, |input| {
        let mut frame_params = base.clone();
        config.apply(&mut frame_params, modifiable, input.feature)?;
        let built = node.build(&frame_params)?;
        chain(input.prior, built)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/apply.rs"]
mod tests;
