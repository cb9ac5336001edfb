//! Node catalogue: named builders turning a parameter set into a motion preset or a
//! batch of flat effect settings.

use serde::{Serialize, de::DeserializeOwned};

use crate::foundation::{error::FlexResult, params::ParameterSet};

pub(crate) mod effects;
pub(crate) mod motion;

/// Capability shared by every node.
pub trait FlexNode {
    /// What one build produces.
    type Output;

    /// Stable node identifier (`sine`, `vignette`, ...).
    fn name(&self) -> &'static str;

    /// Parameters a feature may modulate, ending with `"None"`.
    fn modifiable_params(&self) -> &'static [&'static str];

    /// `params` completed with the node's defaults; unknown keys are dropped.
    fn resolve_params(&self, params: &ParameterSet) -> FlexResult<ParameterSet>;

    /// Build from parameters; missing keys take the node's defaults.
    fn build(&self, params: &ParameterSet) -> FlexResult<Self::Output>;
}

/// Round-trip `params` through `T` so every field carries a value.
pub(crate) fn with_defaults<T>(params: &ParameterSet) -> FlexResult<ParameterSet>
where
    T: Serialize + DeserializeOwned,
{
    let typed: T = params.decode()?;
    ParameterSet::from_value(&serde_json::to_value(&typed)?)
}

/// Normalize a node name for lookup: lowercase with separators removed.
pub(crate) fn lookup_key(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
