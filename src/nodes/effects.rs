use serde_json::{Map, Value};

use crate::{
    foundation::{
        color::Rgba,
        error::{FlexError, FlexResult},
        params::ParameterSet,
    },
    nodes::{FlexNode, lookup_key, with_defaults},
};

/// Edge darkening.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VignetteParams {
    /// Turn the vignette on.
    pub vignette_enable: bool,
    /// Darkening strength.
    pub vignette_intensity: f64,
    /// Falloff towards the center.
    pub vignette_decay: f64,
}

impl Default for VignetteParams {
    fn default() -> Self {
        Self {
            vignette_enable: true,
            vignette_intensity: 30.0,
            vignette_decay: 0.1,
        }
    }
}

/// Depth-of-field blur. Quality and direction counts are rounded on build.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DepthOfFieldParams {
    /// Turn the blur on.
    pub dof_enable: bool,
    /// Normalized depth where the blur starts.
    pub dof_start: f64,
    /// Normalized depth where the blur is full.
    pub dof_end: f64,
    /// Ramp exponent between start and end.
    pub dof_exponent: f64,
    /// Blur strength.
    pub dof_intensity: f64,
    /// Sample rings per direction.
    pub dof_quality: f64,
    /// Sample directions.
    pub dof_directions: f64,
}

impl Default for DepthOfFieldParams {
    fn default() -> Self {
        Self {
            dof_enable: true,
            dof_start: 0.6,
            dof_end: 1.0,
            dof_exponent: 2.0,
            dof_intensity: 1.0,
            dof_quality: 4.0,
            dof_directions: 16.0,
        }
    }
}

/// Fill for regions revealed by the parallax.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InpaintParams {
    /// Turn inpainting on.
    pub inpaint_enable: bool,
    /// Fill with black instead of `inpaint_color`.
    pub inpaint_black: bool,
    /// Steepness limit above which a pixel counts as revealed.
    pub inpaint_limit: f64,
    /// Color literal, decoded on build. Anything that is not a valid literal string
    /// decodes to green.
    pub inpaint_color: Value,
}

impl Default for InpaintParams {
    fn default() -> Self {
        Self {
            inpaint_enable: true,
            inpaint_black: false,
            inpaint_limit: 1.0,
            inpaint_color: Value::from("#00FF00"),
        }
    }
}

impl InpaintParams {
    /// Decoded inpaint color; malformed or non-string literals fall back to green.
    pub fn color(&self) -> Rgba {
        Rgba::from_value(&self.inpaint_color).unwrap_or_else(|err| {
            tracing::warn!(
                color = %self.inpaint_color,
                error = %err,
                "falling back to green inpaint color"
            );
            Rgba::green()
        })
    }
}

/// Color grading, in percent.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorParams {
    /// Turn grading on.
    pub color_enable: bool,
    /// Saturation; 100 is neutral.
    pub color_saturation: f64,
    /// Contrast; 100 is neutral.
    pub color_contrast: f64,
    /// Brightness; 100 is neutral.
    pub color_brightness: f64,
    /// Gamma; 100 is neutral.
    pub color_gamma: f64,
    /// Grayscale mix; 0 is off.
    pub color_grayscale: f64,
    /// Sepia mix; 0 is off.
    pub color_sepia: f64,
}

impl Default for ColorParams {
    fn default() -> Self {
        Self {
            color_enable: true,
            color_saturation: 100.0,
            color_contrast: 100.0,
            color_brightness: 100.0,
            color_gamma: 100.0,
            color_grayscale: 0.0,
            color_sepia: 0.0,
        }
    }
}

/// Every effect node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectNode {
    /// [`VignetteParams`].
    Vignette,
    /// [`DepthOfFieldParams`].
    DepthOfField,
    /// [`InpaintParams`].
    Inpaint,
    /// [`ColorParams`].
    Color,
}

impl EffectNode {
    /// Catalogue order.
    pub const ALL: [EffectNode; 4] = [
        Self::Vignette,
        Self::DepthOfField,
        Self::Inpaint,
        Self::Color,
    ];

    /// Look a node up by name (`dof` is accepted for depth of field).
    pub fn from_name(name: &str) -> FlexResult<Self> {
        let key = lookup_key(name);
        if key == "dof" {
            return Ok(Self::DepthOfField);
        }
        Self::ALL
            .into_iter()
            .find(|n| lookup_key(n.name()) == key)
            .ok_or_else(|| FlexError::validation(format!("unknown effect node '{name}'")))
    }
}

impl FlexNode for EffectNode {
    /// Flat effect keys written by the node.
    type Output = Map<String, Value>;

    fn name(&self) -> &'static str {
        match self {
            Self::Vignette => "vignette",
            Self::DepthOfField => "depth_of_field",
            Self::Inpaint => "inpaint",
            Self::Color => "color",
        }
    }

    fn modifiable_params(&self) -> &'static [&'static str] {
        match self {
            Self::Vignette => &["vignette_intensity", "vignette_decay", "None"],
            Self::DepthOfField => &[
                "dof_intensity",
                "dof_start",
                "dof_end",
                "dof_exponent",
                "dof_quality",
                "dof_directions",
                "None",
            ],
            Self::Inpaint => &["inpaint_limit", "None"],
            Self::Color => &[
                "color_saturation",
                "color_contrast",
                "color_brightness",
                "color_gamma",
                "color_grayscale",
                "color_sepia",
                "None",
            ],
        }
    }

    fn resolve_params(&self, params: &ParameterSet) -> FlexResult<ParameterSet> {
        match self {
            Self::Vignette => with_defaults::<VignetteParams>(params),
            Self::DepthOfField => with_defaults::<DepthOfFieldParams>(params),
            Self::Inpaint => with_defaults::<InpaintParams>(params),
            Self::Color => with_defaults::<ColorParams>(params),
        }
    }

    fn build(&self, params: &ParameterSet) -> FlexResult<Map<String, Value>> {
        let mut out = Map::new();
        match self {
            Self::Vignette => {
                let p: VignetteParams = params.decode()?;
                out.insert("vignette_enable".into(), p.vignette_enable.into());
                out.insert("vignette_intensity".into(), p.vignette_intensity.into());
                out.insert("vignette_decay".into(), p.vignette_decay.into());
            }
            Self::DepthOfField => {
                let p: DepthOfFieldParams = params.decode()?;
                out.insert("dof_enable".into(), p.dof_enable.into());
                out.insert("dof_start".into(), p.dof_start.into());
                out.insert("dof_end".into(), p.dof_end.into());
                out.insert("dof_exponent".into(), p.dof_exponent.into());
                out.insert("dof_intensity".into(), p.dof_intensity.into());
                out.insert("dof_quality".into(), round_count(p.dof_quality).into());
                out.insert("dof_directions".into(), round_count(p.dof_directions).into());
            }
            Self::Inpaint => {
                let p: InpaintParams = params.decode()?;
                let [r, g, b, a] = p.color().to_array();
                out.insert("inpaint_enable".into(), p.inpaint_enable.into());
                out.insert("inpaint_black".into(), p.inpaint_black.into());
                out.insert("inpaint_limit".into(), p.inpaint_limit.into());
                out.insert("inpaint_color_r".into(), r.into());
                out.insert("inpaint_color_g".into(), g.into());
                out.insert("inpaint_color_b".into(), b.into());
                out.insert("inpaint_color_a".into(), a.into());
            }
            Self::Color => {
                let p: ColorParams = params.decode()?;
                out.insert("color_enable".into(), p.color_enable.into());
                out.insert("color_saturation".into(), p.color_saturation.into());
                out.insert("color_contrast".into(), p.color_contrast.into());
                out.insert("color_brightness".into(), p.color_brightness.into());
                out.insert("color_gamma".into(), p.color_gamma.into());
                out.insert("color_grayscale".into(), p.color_grayscale.into());
                out.insert("color_sepia".into(), p.color_sepia.into());
            }
        }
        Ok(out)
    }
}

fn round_count(v: f64) -> i64 {
    v.round() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/nodes/effects.rs"]
mod tests;
