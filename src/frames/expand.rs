use crate::foundation::{
    core::Feature,
    error::{FlexError, FlexResult},
};

/// Prior value handed to a node: one item (possibly absent) or one item per frame.
#[derive(Debug)]
pub enum Prior<'a, T> {
    /// One prior shared by every frame, or none.
    Single(Option<&'a T>),
    /// One prior per frame.
    Sequence(&'a [T]),
}

impl<T> Clone for Prior<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Prior<'_, T> {}

impl<'a, T> Prior<'a, T> {
    /// No prior at all.
    pub fn none() -> Self {
        Self::Single(None)
    }

    /// Borrow an [`Expanded`] result as the prior of the next stage.
    pub fn from_expanded(expanded: &'a Expanded<T>) -> Self {
        match expanded {
            Expanded::Single(item) => Self::Single(Some(item)),
            Expanded::Frames(items) => Self::Sequence(items),
        }
    }
}

/// Per-frame inputs passed to the builder closure of [`expand`].
#[derive(Debug)]
pub struct FrameInput<'a, T> {
    /// Feature value for this frame; `None` when no feature was supplied.
    pub feature: Option<f64>,
    /// Frame index; `None` for a single, frame-less build.
    pub frame: Option<usize>,
    /// Prior item paired with this frame.
    pub prior: Option<&'a T>,
}

impl<T> FrameInput<'_, T> {
    /// Feature value, `0.0` when absent.
    pub fn feature_value(&self) -> f64 {
        self.feature.unwrap_or(0.0)
    }
}

/// Output of [`expand`]: one item, or one item per frame in frame order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Expanded<U> {
    /// Built once, without a frame index.
    Single(U),
    /// Built once per frame.
    Frames(Vec<U>),
}

impl<U> Expanded<U> {
    /// Number of produced items.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Frames(v) => v.len(),
        }
    }

    /// True for an empty frame list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for [`Expanded::Single`].
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// The item of a single build.
    pub fn as_single(&self) -> Option<&U> {
        match self {
            Self::Single(u) => Some(u),
            Self::Frames(_) => None,
        }
    }

    /// The items of a per-frame build.
    pub fn as_frames(&self) -> Option<&[U]> {
        match self {
            Self::Single(_) => None,
            Self::Frames(v) => Some(v),
        }
    }

    /// Apply `f` to every item, keeping the shape.
    pub fn map<V>(self, mut f: impl FnMut(U) -> V) -> Expanded<V> {
        match self {
            Self::Single(u) => Expanded::Single(f(u)),
            Self::Frames(v) => Expanded::Frames(v.into_iter().map(f).collect()),
        }
    }

    /// All items in frame order; a single build gives one item.
    pub fn into_vec(self) -> Vec<U> {
        match self {
            Self::Single(u) => vec![u],
            Self::Frames(v) => v,
        }
    }
}

/// Run `make` once, or once per frame, depending on the prior and the feature.
///
/// | prior      | feature | calls                                  | result   |
/// |------------|---------|----------------------------------------|----------|
/// | single     | absent  | once, no frame index                   | single   |
/// | sequence   | absent  | once per prior item                    | frames   |
/// | single     | present | once per feature frame                 | frames   |
/// | sequence   | present | once per frame; lengths must agree     | frames   |
///
/// `progress` fires once per produced frame and never for a single build. The first
/// error from `make` aborts the batch.
#[tracing::instrument(skip_all)]
pub fn expand<T, U, F>(
    prior: Prior<'_, T>,
    feature: Option<&dyn Feature>,
    progress: &mut dyn FnMut(),
    mut make: F,
) -> FlexResult<Expanded<U>>
where
    F: FnMut(FrameInput<'_, T>) -> FlexResult<U>,
{
    match (prior, feature) {
        (Prior::Single(item), None) => make(FrameInput {
            feature: None,
            frame: None,
            prior: item,
        })
        .map(Expanded::Single),
        (Prior::Sequence(items), None) => {
            tracing::debug!(frames = items.len(), "expanding prior sequence");
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                out.push(make(FrameInput {
                    feature: None,
                    frame: Some(i),
                    prior: Some(item),
                })?);
                progress();
            }
            Ok(Expanded::Frames(out))
        }
        (Prior::Single(item), Some(feature)) => {
            let n = feature.frame_count();
            tracing::debug!(frames = n, "expanding over feature");
            let mut out = Vec::with_capacity(n);
            for i in 0..n {
                out.push(make(FrameInput {
                    feature: Some(feature.value_at(i)),
                    frame: Some(i),
                    prior: item,
                })?);
                progress();
            }
            Ok(Expanded::Frames(out))
        }
        (Prior::Sequence(items), Some(feature)) => {
            let n = feature.frame_count();
            if items.len() != n {
                return Err(FlexError::length_mismatch(n, items.len()));
            }
            tracing::debug!(frames = n, "expanding prior sequence over feature");
            let mut out = Vec::with_capacity(n);
            for (i, item) in items.iter().enumerate() {
                out.push(make(FrameInput {
                    feature: Some(feature.value_at(i)),
                    frame: Some(i),
                    prior: Some(item),
                })?);
                progress();
            }
            Ok(Expanded::Frames(out))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frames/expand.rs"]
mod tests;
