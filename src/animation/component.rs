use kurbo::{ParamCurve, Point, QuadBez};

use crate::animation::target::Target;

/// Atomic animation unit: one curve driving one render target.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Component {
    /// Render parameter this component drives.
    pub target: Target,
    /// Curve shape and its parameters.
    pub curve: Curve,
    /// Evaluate the curve with time running backwards (`1 - t`).
    #[serde(default)]
    pub reverse: bool,
    /// Output is an increment on the target's running value rather than an absolute value.
    #[serde(default)]
    pub cumulative: bool,
}

impl Component {
    /// Forward, non-cumulative component.
    pub fn new(target: Target, curve: Curve) -> Self {
        Self {
            target,
            curve,
            reverse: false,
            cumulative: false,
        }
    }

    /// Set the `reverse` flag.
    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Set the `cumulative` flag.
    pub fn cumulative(mut self, cumulative: bool) -> Self {
        self.cumulative = cumulative;
        self
    }

    /// Curve kind identifier (`sine`, `arc`, ...).
    pub fn kind(&self) -> &'static str {
        self.curve.kind()
    }

    /// Sample at normalized time `t` (clamped to `[0, 1]`), honoring `reverse`.
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let t = if self.reverse { 1.0 - t } else { t };
        self.curve.sample(t)
    }
}

/// Curve shapes evaluated on normalized time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    /// `bias + amplitude * sin(2π(cycles·t + phase))`.
    Sine {
        /// Peak deviation from `bias`.
        amplitude: f64,
        /// Periods over `[0, 1]`.
        cycles: f64,
        /// Phase offset, in periods.
        phase: f64,
        /// Center value.
        bias: f64,
    },
    /// `bias + amplitude * cos(2π(cycles·t + phase))`.
    Cosine {
        /// Peak deviation from `bias`.
        amplitude: f64,
        /// Periods over `[0, 1]`.
        cycles: f64,
        /// Phase offset, in periods.
        phase: f64,
        /// Center value.
        bias: f64,
    },
    /// Triangle wave in phase with [`Curve::Sine`].
    Triangle {
        /// Peak deviation from `bias`.
        amplitude: f64,
        /// Periods over `[0, 1]`.
        cycles: f64,
        /// Phase offset, in periods.
        phase: f64,
        /// Center value.
        bias: f64,
    },
    /// Power-law ramp from `low` to `high` over `[start, end]`, held outside it.
    Linear {
        /// Time the ramp begins.
        start: f64,
        /// Time the ramp ends.
        end: f64,
        /// Value up to `start`.
        low: f64,
        /// Value from `end` on.
        high: f64,
        /// Ramp shape; 1 is linear.
        exponent: f64,
    },
    /// `scale * base^t`.
    Exponential {
        /// Growth base.
        base: f64,
        /// Value at `t = 0`.
        scale: f64,
    },
    /// Quadratic Bézier through `start`, `middle` (at `t = 0.5`) and `end`.
    Arc {
        /// Value at `t = 0`.
        start: f64,
        /// Value at `t = 0.5`.
        middle: f64,
        /// Value at `t = 1`.
        end: f64,
    },
    /// Constant value.
    Set {
        /// The constant.
        value: f64,
    },
}

impl Curve {
    /// Snake-case kind, as serialized in the `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sine { .. } => "sine",
            Self::Cosine { .. } => "cosine",
            Self::Triangle { .. } => "triangle",
            Self::Linear { .. } => "linear",
            Self::Exponential { .. } => "exponential",
            Self::Arc { .. } => "arc",
            Self::Set { .. } => "set",
        }
    }

    /// Evaluate at normalized time `t`; no reversal or clamping is applied here.
    pub fn sample(&self, t: f64) -> f64 {
        match *self {
            Self::Sine {
                amplitude,
                cycles,
                phase,
                bias,
            } => bias + amplitude * (std::f64::consts::TAU * (cycles * t + phase)).sin(),
            Self::Cosine {
                amplitude,
                cycles,
                phase,
                bias,
            } => bias + amplitude * (std::f64::consts::TAU * (cycles * t + phase)).cos(),
            Self::Triangle {
                amplitude,
                cycles,
                phase,
                bias,
            } => bias + amplitude * triangle(cycles * t + phase),
            Self::Linear {
                start,
                end,
                low,
                high,
                exponent,
            } => {
                if end <= start {
                    return if t < start { low } else { high };
                }
                let x = ((t - start) / (end - start)).clamp(0.0, 1.0);
                low + (high - low) * x.powf(exponent)
            }
            Self::Exponential { base, scale } => scale * base.powf(t),
            Self::Arc { start, middle, end } => arc(start, middle, end, t),
            Self::Set { value } => value,
        }
    }
}

/// Unit triangle wave with period 1: 0 at `x = 0`, peak 1 at `x = 0.25`, trough -1 at `x = 0.75`.
fn triangle(x: f64) -> f64 {
    4.0 * ((x - 0.25).rem_euclid(1.0) - 0.5).abs() - 1.0
}

fn arc(start: f64, middle: f64, end: f64, t: f64) -> f64 {
    // Control point chosen so the curve hits `middle` exactly at t = 0.5.
    let control = 2.0 * middle - 0.5 * (start + end);
    let bez = QuadBez::new(
        Point::new(0.0, start),
        Point::new(0.5, control),
        Point::new(1.0, end),
    );
    bez.eval(t.clamp(0.0, 1.0)).y
}

#[cfg(test)]
#[path = "../../tests/unit/animation/component.rs"]
mod tests;
