use serde_json::Value;

use crate::{
    animation::motion::{CompositeMotion, Motion, Preset},
    effects::state::EffectsState,
    foundation::error::{FlexError, FlexResult},
};

/// Append `current` to the prior motion chain.
///
/// Without a prior, or with an empty one, the result is `current` alone. The prior is
/// left untouched.
pub fn combine(prior: Option<&Motion>, current: Preset) -> Motion {
    match prior.filter(|m| !m.presets().is_empty()) {
        None => Motion::Preset(current),
        Some(prior) => {
            let mut chain = CompositeMotion::from_presets(prior.presets().to_vec());
            chain.push(current);
            Motion::Composite(chain)
        }
    }
}

/// Layer `current` over the prior effects; keys of `current` win.
///
/// `current` must be a JSON object.
pub fn merge(prior: Option<&EffectsState>, current: &Value) -> FlexResult<EffectsState> {
    let Value::Object(incoming) = current else {
        return Err(FlexError::invalid_effects_type(format!(
            "effects should be a mapping, got {current}"
        )));
    };
    let mut merged = prior.cloned().unwrap_or_default();
    merged.overwrite(incoming);
    Ok(merged)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/chain.rs"]
mod tests;
