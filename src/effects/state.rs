use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::foundation::error::{FlexError, FlexResult};

/// Group that receives keys with no entry in [`EFFECT_KEY_MAP`].
pub const STATE_GROUP: &str = "state";

/// Flat effect keys and the renderer group/attribute they land on.
pub const EFFECT_KEY_MAP: &[(&str, (&str, &str))] = &[
    ("vignette_enable", ("vignette", "enable")),
    ("vignette_intensity", ("vignette", "intensity")),
    ("vignette_decay", ("vignette", "decay")),
    ("dof_enable", ("blur", "enable")),
    ("dof_start", ("blur", "start")),
    ("dof_end", ("blur", "end")),
    ("dof_exponent", ("blur", "exponent")),
    ("dof_intensity", ("blur", "intensity")),
    ("dof_quality", ("blur", "quality")),
    ("dof_directions", ("blur", "directions")),
    ("inpaint_enable", ("inpaint", "enable")),
    ("inpaint_black", ("inpaint", "black")),
    ("inpaint_limit", ("inpaint", "limit")),
    ("inpaint_color_r", ("inpaint", "color_r")),
    ("inpaint_color_g", ("inpaint", "color_g")),
    ("inpaint_color_b", ("inpaint", "color_b")),
    ("inpaint_color_a", ("inpaint", "color_a")),
    ("color_enable", ("colors", "enable")),
    ("color_saturation", ("colors", "saturation")),
    ("color_contrast", ("colors", "contrast")),
    ("color_brightness", ("colors", "brightness")),
    ("color_gamma", ("colors", "gamma")),
    ("color_grayscale", ("colors", "grayscale")),
    ("color_sepia", ("colors", "sepia")),
];

/// Look up the `(group, attribute)` a flat effect key maps to.
pub fn effect_slot(key: &str) -> Option<(&'static str, &'static str)> {
    EFFECT_KEY_MAP
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, slot)| *slot)
}

/// Flat effect settings accumulated along a chain of effect nodes.
///
/// Keys keep the flat node naming (`vignette_intensity`, `dof_start`, ...); use
/// [`EffectsState::grouped`] for the renderer's group layout.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EffectsState(BTreeMap<String, Value>);

impl EffectsState {
    /// No effect settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a flat key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert or replace one key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no key is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overwrite every key present in `incoming`; other keys are kept.
    pub fn overwrite(&mut self, incoming: &Map<String, Value>) {
        for (k, v) in incoming {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Decode a dynamic effects value; `null` means "no effects".
    pub fn from_value(value: &Value) -> FlexResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(Some(
                map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            )),
            other => Err(FlexError::invalid_effects_type(format!(
                "effects should be a mapping, got {other}"
            ))),
        }
    }

    /// Project onto renderer groups via [`EFFECT_KEY_MAP`].
    pub fn grouped(&self) -> BTreeMap<String, BTreeMap<String, Value>> {
        let mut out: BTreeMap<String, BTreeMap<String, Value>> = BTreeMap::new();
        for (key, value) in &self.0 {
            let (group, attr) = effect_slot(key).unwrap_or((STATE_GROUP, key.as_str()));
            out.entry(group.to_string())
                .or_default()
                .insert(attr.to_string(), value.clone());
        }
        out
    }
}

impl FromIterator<(String, Value)> for EffectsState {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/state.rs"]
mod tests;
