use std::collections::BTreeMap;

use crate::{
    animation::{component::Component, target::Target},
    foundation::error::{FlexError, FlexResult},
};

/// Named bundle of components produced by one motion node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Preset {
    /// Node name that produced the bundle (`sine`, `circle`, ...).
    pub name: String,
    /// Components in application order.
    pub components: Vec<Component>,
}

impl Preset {
    /// Bundle `components` under `name`.
    pub fn new(name: impl Into<String>, components: Vec<Component>) -> Self {
        Self {
            name: name.into(),
            components,
        }
    }

    /// One-component preset named after the component's curve.
    pub fn single(component: Component) -> Self {
        Self::new(component.kind(), vec![component])
    }
}

/// Ordered, append-only chain of presets.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompositeMotion {
    presets: Vec<Preset>,
}

impl CompositeMotion {
    /// Chain in application order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Number of chained presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// True for a chain with no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub(crate) fn from_presets(presets: Vec<Preset>) -> Self {
        Self { presets }
    }

    pub(crate) fn push(&mut self, preset: Preset) {
        self.presets.push(preset);
    }
}

/// A single preset or a chain of them, as handed to the renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Motion {
    /// One preset.
    Preset(Preset),
    /// Presets layered in order.
    Composite(CompositeMotion),
}

impl Default for Motion {
    /// An empty chain, which [`combine`](crate::combine) treats as no prior.
    fn default() -> Self {
        Self::Composite(CompositeMotion::default())
    }
}

impl Motion {
    /// Presets in application order.
    pub fn presets(&self) -> &[Preset] {
        match self {
            Self::Preset(p) => std::slice::from_ref(p),
            Self::Composite(c) => c.presets(),
        }
    }

    /// Every component of every preset, in application order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.presets().iter().flat_map(|p| p.components.iter())
    }

    /// Decode a dynamic prior motion; `null` means "no prior".
    pub fn from_value(value: &serde_json::Value) -> FlexResult<Option<Self>> {
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| FlexError::shape(format!("motion should be a preset or composite: {e}")))
    }
}

/// Running per-target values used to sample motions frame by frame.
///
/// Non-cumulative components overwrite their target; cumulative components add to the
/// value the target holds, which persists across calls to [`TargetState::apply`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TargetState {
    values: BTreeMap<Target, f64>,
}

impl TargetState {
    /// State with no target written.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `target`, if any component has written it.
    pub fn get(&self, target: Target) -> Option<f64> {
        self.values.get(&target).copied()
    }

    /// Apply every component of `motion` sampled at normalized time `t`.
    pub fn apply(&mut self, motion: &Motion, t: f64) {
        for component in motion.components() {
            self.apply_component(component, t);
        }
    }

    /// Apply one component sampled at normalized time `t`.
    pub fn apply_component(&mut self, component: &Component, t: f64) {
        if component.target == Target::Nothing {
            return;
        }
        let v = component.sample(t);
        let slot = self.values.entry(component.target).or_insert(0.0);
        if component.cumulative {
            *slot += v;
        } else {
            *slot = v;
        }
    }

    /// Snapshot keyed by renderer identifiers.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.values.iter().map(|(t, v)| (t.id(), *v)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
