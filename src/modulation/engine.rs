use crate::foundation::{
    error::{FlexError, FlexResult},
    params::ParameterSet,
};

/// `feature_param` value that turns modulation off.
pub const FEATURE_PARAM_NONE: &str = "None";

/// How a feature value rescales a parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureMode {
    /// `base * (1 + (feature - 0.5) * strength)`; a feature of 0.5 leaves `base` unchanged.
    #[default]
    Relative,
    /// `base * feature * strength`.
    Absolute,
}

impl std::str::FromStr for FeatureMode {
    type Err = FlexError;

    fn from_str(s: &str) -> FlexResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relative" => Ok(Self::Relative),
            "absolute" => Ok(Self::Absolute),
            other => Err(FlexError::validation(format!(
                "unknown feature mode '{other}'"
            ))),
        }
    }
}

/// Zero out feature values strictly below `threshold`.
pub fn gate(feature: f64, threshold: f64) -> f64 {
    if feature < threshold { 0.0 } else { feature }
}

/// Rescale `base` by an already-gated feature value.
pub fn modulate(base: f64, feature: f64, strength: f64, mode: FeatureMode) -> f64 {
    match mode {
        FeatureMode::Relative => base * (1.0 + (feature - 0.5) * strength),
        FeatureMode::Absolute => base * feature * strength,
    }
}

/// Per-node modulation settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ModulationConfig {
    /// Modulation strength, in `[0, 10]`.
    pub strength: f64,
    /// Feature values below this (in `[0, 1]`) are treated as zero.
    pub feature_threshold: f64,
    /// Parameter to modulate. `None` selects the node's first modifiable parameter;
    /// `"None"` disables modulation.
    pub feature_param: Option<String>,
    /// Relative or absolute rescaling.
    pub feature_mode: FeatureMode,
}

impl Default for ModulationConfig {
    fn default() -> Self {
        Self {
            strength: 1.0,
            feature_threshold: 0.0,
            feature_param: None,
            feature_mode: FeatureMode::Relative,
        }
    }
}

impl ModulationConfig {
    /// Check that `strength` and `feature_threshold` are finite and in range.
    pub fn validate(&self) -> FlexResult<()> {
        if !self.strength.is_finite() || !(0.0..=10.0).contains(&self.strength) {
            return Err(FlexError::validation(
                "strength must be finite and within [0, 10]",
            ));
        }
        if !self.feature_threshold.is_finite() || !(0.0..=1.0).contains(&self.feature_threshold) {
            return Err(FlexError::validation(
                "feature_threshold must be finite and within [0, 1]",
            ));
        }
        Ok(())
    }

    /// Resolve the parameter to modulate against a node's modifiable list.
    ///
    /// Returns `Ok(None)` when modulation is disabled.
    pub fn resolve_param<'a>(&'a self, modifiable: &[&'a str]) -> FlexResult<Option<&'a str>> {
        let selected = match self.feature_param.as_deref() {
            None => match modifiable.first() {
                Some(first) => *first,
                None => return Ok(None),
            },
            Some(p) => p,
        };
        if selected == FEATURE_PARAM_NONE {
            return Ok(None);
        }
        if !modifiable.contains(&selected) {
            return Err(FlexError::validation(format!(
                "'{selected}' is not a modifiable parameter; expected one of {modifiable:?}"
            )));
        }
        Ok(Some(selected))
    }

    /// Gate then modulate one value.
    pub fn modulate_value(&self, base: f64, feature: f64) -> f64 {
        modulate(
            base,
            gate(feature, self.feature_threshold),
            self.strength,
            self.feature_mode,
        )
    }

    /// Rescale the selected parameter of `params` in place.
    ///
    /// Does nothing without a feature value or when modulation is disabled. The selected
    /// parameter must be present and numeric.
    pub fn apply(
        &self,
        params: &mut ParameterSet,
        modifiable: &[&str],
        feature: Option<f64>,
    ) -> FlexResult<()> {
        let Some(feature) = feature else {
            return Ok(());
        };
        let Some(name) = self.resolve_param(modifiable)? else {
            return Ok(());
        };
        let base = params.number(name).ok_or_else(|| {
            FlexError::validation(format!("modulated parameter '{name}' must be numeric"))
        })?;
        let value = self.modulate_value(base, feature);
        if !value.is_finite() {
            return Err(FlexError::validation(format!(
                "modulated parameter '{name}' is not finite"
            )));
        }
        params.insert(name, value);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/modulation/engine.rs"]
mod tests;
