use crate::{
    animation::{
        component::{Component, Curve},
        motion::Preset,
        presets::{CircleParams, DollyParams, OrbitalParams, SwayParams, ZoomParams},
        target::Target,
    },
    foundation::{
        error::{FlexError, FlexResult},
        params::ParameterSet,
    },
    nodes::{FlexNode, lookup_key, with_defaults},
};

/// Parameters shared by the periodic primitives (sine, cosine, triangle).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Driven target.
    pub target: Target,
    /// Peak deviation from `bias`.
    pub amplitude: f64,
    /// Full periods over the animation.
    pub cycles: f64,
    /// Phase offset, in periods.
    pub phase: f64,
    /// Run time backwards.
    pub reverse: bool,
    /// Center value.
    pub bias: f64,
    /// Add to the target instead of overwriting it.
    pub cumulative: bool,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            target: Target::Nothing,
            amplitude: 1.0,
            cycles: 1.0,
            phase: 0.0,
            reverse: false,
            bias: 0.0,
            cumulative: false,
        }
    }
}

/// Ramp from `low` to `high` between normalized times `start` and `end`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LinearParams {
    /// Driven target.
    pub target: Target,
    /// Time the ramp begins.
    pub start: f64,
    /// Time the ramp ends.
    pub end: f64,
    /// Value before `start`.
    pub low: f64,
    /// Value after `end`.
    pub high: f64,
    /// Ramp shape; 1 is linear.
    pub exponent: f64,
    /// Run time backwards.
    pub reverse: bool,
    /// Add to the target instead of overwriting it.
    pub cumulative: bool,
}

impl Default for LinearParams {
    fn default() -> Self {
        Self {
            target: Target::Nothing,
            start: 0.0,
            end: 1.0,
            low: 0.0,
            high: 1.0,
            exponent: 1.0,
            reverse: false,
            cumulative: false,
        }
    }
}

/// `scale * base^t`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExponentialParams {
    /// Driven target.
    pub target: Target,
    /// Growth base.
    pub base: f64,
    /// Value at `t = 0`.
    pub scale: f64,
    /// Run time backwards.
    pub reverse: bool,
    /// Add to the target instead of overwriting it.
    pub cumulative: bool,
}

impl Default for ExponentialParams {
    fn default() -> Self {
        Self {
            target: Target::Nothing,
            base: 2.0,
            scale: 1.0,
            reverse: false,
            cumulative: false,
        }
    }
}

/// Quadratic arc through three values.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArcParams {
    /// Driven target.
    pub target: Target,
    /// Value at `t = 0`.
    pub start: f64,
    /// Value at `t = 0.5`.
    pub middle: f64,
    /// Value at `t = 1`.
    pub end: f64,
    /// Run time backwards.
    pub reverse: bool,
    /// Add to the target instead of overwriting it.
    pub cumulative: bool,
}

/// Pin a target to a constant.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SetTargetParams {
    /// Driven target.
    pub target: Target,
    /// Constant value.
    pub value: f64,
}

/// Every motion node, primitives first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionNode {
    /// Sine wave, [`WaveParams`].
    Sine,
    /// Cosine wave, [`WaveParams`].
    Cosine,
    /// Triangle wave, [`WaveParams`].
    Triangle,
    /// [`LinearParams`].
    Linear,
    /// [`ExponentialParams`].
    Exponential,
    /// [`ArcParams`].
    Arc,
    /// [`SetTargetParams`].
    SetTarget,
    /// [`CircleParams`].
    Circle,
    /// [`ZoomParams`].
    Zoom,
    /// [`DollyParams`].
    Dolly,
    /// Vertical sway, [`SwayParams`].
    Vertical,
    /// Horizontal sway, [`SwayParams`].
    Horizontal,
    /// [`OrbitalParams`].
    Orbital,
}

const WAVE_PARAMS: &[&str] = &["amplitude", "phase", "cycles", "None"];
const SWAY_PARAMS: &[&str] = &["intensity", "phase", "static_value", "None"];

impl MotionNode {
    /// Catalogue order.
    pub const ALL: [MotionNode; 13] = [
        Self::Sine,
        Self::Cosine,
        Self::Triangle,
        Self::Linear,
        Self::Exponential,
        Self::Arc,
        Self::SetTarget,
        Self::Circle,
        Self::Zoom,
        Self::Dolly,
        Self::Vertical,
        Self::Horizontal,
        Self::Orbital,
    ];

    /// Look a node up by name; case, `_`, `-` and spaces are ignored.
    pub fn from_name(name: &str) -> FlexResult<Self> {
        let key = lookup_key(name);
        Self::ALL
            .into_iter()
            .find(|n| lookup_key(n.name()) == key)
            .ok_or_else(|| FlexError::validation(format!("unknown motion node '{name}'")))
    }

    fn wave(&self, p: WaveParams) -> Curve {
        let WaveParams {
            amplitude,
            cycles,
            phase,
            bias,
            ..
        } = p;
        match self {
            Self::Cosine => Curve::Cosine {
                amplitude,
                cycles,
                phase,
                bias,
            },
            Self::Triangle => Curve::Triangle {
                amplitude,
                cycles,
                phase,
                bias,
            },
            _ => Curve::Sine {
                amplitude,
                cycles,
                phase,
                bias,
            },
        }
    }
}

impl FlexNode for MotionNode {
    type Output = Preset;

    fn name(&self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Cosine => "cosine",
            Self::Triangle => "triangle",
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::Arc => "arc",
            Self::SetTarget => "set_target",
            Self::Circle => "circle",
            Self::Zoom => "zoom",
            Self::Dolly => "dolly",
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Orbital => "orbital",
        }
    }

    fn modifiable_params(&self) -> &'static [&'static str] {
        match self {
            Self::Sine | Self::Cosine | Self::Triangle => WAVE_PARAMS,
            Self::Linear => &["start", "end", "low", "high", "exponent", "None"],
            Self::Exponential => &["base", "scale", "None"],
            Self::Arc => &["start", "middle", "end", "None"],
            Self::SetTarget => &["value", "None"],
            Self::Circle => &[
                "intensity",
                "phase_x",
                "phase_y",
                "phase_z",
                "amplitude_x",
                "amplitude_y",
                "amplitude_z",
                "static_value",
                "None",
            ],
            Self::Zoom => &["intensity", "phase", "None"],
            Self::Dolly | Self::Orbital => &["intensity", "depth", "None"],
            Self::Vertical | Self::Horizontal => SWAY_PARAMS,
        }
    }

    fn resolve_params(&self, params: &ParameterSet) -> FlexResult<ParameterSet> {
        match self {
            Self::Sine | Self::Cosine | Self::Triangle => with_defaults::<WaveParams>(params),
            Self::Linear => with_defaults::<LinearParams>(params),
            Self::Exponential => with_defaults::<ExponentialParams>(params),
            Self::Arc => with_defaults::<ArcParams>(params),
            Self::SetTarget => with_defaults::<SetTargetParams>(params),
            Self::Circle => with_defaults::<CircleParams>(params),
            Self::Zoom => with_defaults::<ZoomParams>(params),
            Self::Dolly => with_defaults::<DollyParams>(params),
            Self::Vertical | Self::Horizontal => with_defaults::<SwayParams>(params),
            Self::Orbital => with_defaults::<OrbitalParams>(params),
        }
    }

    fn build(&self, params: &ParameterSet) -> FlexResult<Preset> {
        let preset = match self {
            Self::Sine | Self::Cosine | Self::Triangle => {
                let p: WaveParams = params.decode()?;
                let (target, reverse, cumulative) = (p.target, p.reverse, p.cumulative);
                primitive(target, self.wave(p), reverse, cumulative)
            }
            Self::Linear => {
                let p: LinearParams = params.decode()?;
                let curve = Curve::Linear {
                    start: p.start,
                    end: p.end,
                    low: p.low,
                    high: p.high,
                    exponent: p.exponent,
                };
                primitive(p.target, curve, p.reverse, p.cumulative)
            }
            Self::Exponential => {
                let p: ExponentialParams = params.decode()?;
                let curve = Curve::Exponential {
                    base: p.base,
                    scale: p.scale,
                };
                primitive(p.target, curve, p.reverse, p.cumulative)
            }
            Self::Arc => {
                let p: ArcParams = params.decode()?;
                let curve = Curve::Arc {
                    start: p.start,
                    middle: p.middle,
                    end: p.end,
                };
                primitive(p.target, curve, p.reverse, p.cumulative)
            }
            Self::SetTarget => {
                let p: SetTargetParams = params.decode()?;
                primitive(p.target, Curve::Set { value: p.value }, false, false)
            }
            Self::Circle => params.decode::<CircleParams>()?.preset(),
            Self::Zoom => params.decode::<ZoomParams>()?.preset(),
            Self::Dolly => params.decode::<DollyParams>()?.preset(),
            Self::Vertical => params.decode::<SwayParams>()?.vertical(),
            Self::Horizontal => params.decode::<SwayParams>()?.horizontal(),
            Self::Orbital => params.decode::<OrbitalParams>()?.preset(),
        };
        Ok(preset)
    }
}

fn primitive(target: Target, curve: Curve, reverse: bool, cumulative: bool) -> Preset {
    Preset::single(
        Component::new(target, curve)
            .reversed(reverse)
            .cumulative(cumulative),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/nodes/motion.rs"]
mod tests;
