use crate::foundation::error::{FlexError, FlexResult};

/// Per-frame control signal consumed read-only by the engine.
///
/// Values are nominally in `[0, 1]`. Indices passed to [`Feature::value_at`] are always
/// below [`Feature::frame_count`].
pub trait Feature {
    /// Number of frames the signal covers.
    fn frame_count(&self) -> usize;
    /// Signal value at frame `index`.
    fn value_at(&self, index: usize) -> f64;
}

impl<F: Feature + ?Sized> Feature for &F {
    fn frame_count(&self) -> usize {
        (**self).frame_count()
    }

    fn value_at(&self, index: usize) -> f64 {
        (**self).value_at(index)
    }
}

impl Feature for [f64] {
    fn frame_count(&self) -> usize {
        self.len()
    }

    fn value_at(&self, index: usize) -> f64 {
        self.get(index).copied().unwrap_or(0.0)
    }
}

impl Feature for Vec<f64> {
    fn frame_count(&self) -> usize {
        self.len()
    }

    fn value_at(&self, index: usize) -> f64 {
        self.as_slice().value_at(index)
    }
}

/// Owned feature signal, typically loaded from JSON.
///
/// Deserializes from either a bare array (`[0.1, 0.5]`) or an object
/// (`{"values": [0.1, 0.5]}`).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FeatureSeries {
    values: Vec<f64>,
}

impl FeatureSeries {
    /// Build a series, rejecting non-finite samples.
    pub fn new(values: Vec<f64>) -> FlexResult<Self> {
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(FlexError::validation(format!(
                "feature value at frame {i} must be finite"
            )));
        }
        Ok(Self { values })
    }

    /// Raw samples in frame order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Feature for FeatureSeries {
    fn frame_count(&self) -> usize {
        self.values.len()
    }

    fn value_at(&self, index: usize) -> f64 {
        self.values.value_at(index)
    }
}

impl<'de> serde::Deserialize<'de> for FeatureSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr(Vec<f64>),
            Obj { values: Vec<f64> },
        }

        let values = match Repr::deserialize(deserializer)? {
            Repr::Arr(v) => v,
            Repr::Obj { values } => values,
        };
        Self::new(values).map_err(serde::de::Error::custom)
    }
}

/// Normalized animation time of `frame` within a run of `frame_count` frames.
///
/// Frame `0` maps to `0.0`; the run wraps at `1.0`, so the last frame sits one step short
/// of it. Empty or single-frame runs always sample at `0.0`.
pub fn normalized_time(frame: usize, frame_count: usize) -> f64 {
    if frame_count <= 1 {
        return 0.0;
    }
    (frame.min(frame_count - 1) as f64) / (frame_count as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
