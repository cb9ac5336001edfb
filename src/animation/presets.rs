//! Library presets: knob bundles expanded into primitive components over several targets.
//!
//! Conventions shared by every preset:
//! - looping motions run one full cycle over the animation (sine when `smooth`, triangle
//!   otherwise);
//! - one-shot motions ramp once from their rest value (half-cosine ease when `smooth`,
//!   straight line otherwise);
//! - `reverse` is forwarded to every component.

use crate::animation::{
    component::{Component, Curve},
    motion::Preset,
    target::Target,
};

fn oscillate(target: Target, amplitude: f64, phase: f64, bias: f64, smooth: bool) -> Component {
    let curve = if smooth {
        Curve::Sine {
            amplitude,
            cycles: 1.0,
            phase,
            bias,
        }
    } else {
        Curve::Triangle {
            amplitude,
            cycles: 1.0,
            phase,
            bias,
        }
    };
    Component::new(target, curve)
}

fn ramp(target: Target, low: f64, high: f64, smooth: bool) -> Component {
    let curve = if smooth {
        // Half a sine period from trough to crest.
        Curve::Sine {
            amplitude: (high - low) / 2.0,
            cycles: 0.5,
            phase: -0.25,
            bias: (high + low) / 2.0,
        }
    } else {
        Curve::Linear {
            start: 0.0,
            end: 1.0,
            low,
            high,
            exponent: 1.0,
        }
    };
    Component::new(target, curve)
}

fn set(target: Target, value: f64) -> Component {
    Component::new(target, Curve::Set { value })
}

fn finish(name: &str, reverse: bool, components: Vec<Component>) -> Preset {
    Preset::new(
        name,
        components
            .into_iter()
            .map(|c| c.reversed(reverse))
            .collect(),
    )
}

/// Camera traces an ellipse on the offset plane, optionally bobbing in isometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CircleParams {
    /// Overall scale of the motion.
    pub intensity: f64,
    /// Run time backwards.
    pub reverse: bool,
    /// Sine rather than triangle waves.
    pub smooth: bool,
    /// Phase of the horizontal offset, in cycles.
    pub phase_x: f64,
    /// Phase of the vertical offset, in cycles.
    pub phase_y: f64,
    /// Phase of the isometric bob, in cycles.
    pub phase_z: f64,
    /// Horizontal radius factor.
    pub amplitude_x: f64,
    /// Vertical radius factor.
    pub amplitude_y: f64,
    /// Isometric bob factor.
    pub amplitude_z: f64,
    /// Depth of the steady plane.
    pub static_value: f64,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            reverse: false,
            smooth: true,
            phase_x: 0.0,
            phase_y: 0.0,
            phase_z: 0.0,
            amplitude_x: 1.0,
            amplitude_y: 1.0,
            amplitude_z: 0.0,
            static_value: 0.3,
        }
    }
}

impl CircleParams {
    /// Build the `circle` preset.
    pub fn preset(&self) -> Preset {
        let k = 0.5 * self.intensity;
        finish(
            "circle",
            self.reverse,
            vec![
                oscillate(
                    Target::OffsetX,
                    k * self.amplitude_x,
                    self.phase_x,
                    0.0,
                    self.smooth,
                ),
                // Quarter-cycle lead turns the two offsets into a circle.
                oscillate(
                    Target::OffsetY,
                    k * self.amplitude_y,
                    self.phase_y + 0.25,
                    0.0,
                    self.smooth,
                ),
                oscillate(
                    Target::Isometric,
                    k * self.amplitude_z,
                    self.phase_z,
                    0.0,
                    self.smooth,
                ),
                set(Target::Static, self.static_value),
            ],
        )
    }
}

/// Depth height swells from flat to `0.5 * intensity`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ZoomParams {
    /// Peak height is half of this.
    pub intensity: f64,
    /// Run time backwards.
    pub reverse: bool,
    /// Eased rather than linear.
    pub smooth: bool,
    /// Phase offset of the looped swell, in cycles.
    pub phase: f64,
    /// Swell in and out over one cycle instead of ramping once.
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl Default for ZoomParams {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            reverse: false,
            smooth: true,
            phase: 0.0,
            looped: false,
        }
    }
}

impl ZoomParams {
    /// Build the `zoom` preset.
    pub fn preset(&self) -> Preset {
        let peak = 0.5 * self.intensity;
        let height = if self.looped {
            // Starts flat at phase 0 and peaks mid-animation.
            oscillate(
                Target::Height,
                peak / 2.0,
                self.phase - 0.25,
                peak / 2.0,
                self.smooth,
            )
        } else {
            ramp(Target::Height, 0.0, peak, self.smooth)
        };
        finish(
            "zoom",
            self.reverse,
            vec![height, set(Target::Static, 0.0)],
        )
    }
}

/// Camera pushes along the view axis while focusing on `depth`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DollyParams {
    /// Push distance.
    pub intensity: f64,
    /// Run time backwards.
    pub reverse: bool,
    /// Eased rather than linear.
    pub smooth: bool,
    /// Push in and back out over one cycle instead of once.
    #[serde(rename = "loop")]
    pub looped: bool,
    /// Focal depth.
    pub depth: f64,
}

impl Default for DollyParams {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            reverse: false,
            smooth: true,
            looped: true,
            depth: 0.5,
        }
    }
}

impl DollyParams {
    /// Build the `dolly` preset.
    pub fn preset(&self) -> Preset {
        let dolly = if self.looped {
            oscillate(
                Target::Dolly,
                self.intensity / 2.0,
                -0.25,
                self.intensity / 2.0,
                self.smooth,
            )
        } else {
            ramp(Target::Dolly, 0.0, self.intensity, self.smooth)
        };
        finish(
            "dolly",
            self.reverse,
            vec![dolly, set(Target::Focus, self.depth)],
        )
    }
}

/// Sway along one offset axis around a steady focal plane.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SwayParams {
    /// Sway width.
    pub intensity: f64,
    /// Run time backwards.
    pub reverse: bool,
    /// Sine rather than triangle or linear.
    pub smooth: bool,
    /// Oscillate over one cycle instead of sweeping once.
    #[serde(rename = "loop")]
    pub looped: bool,
    /// Phase offset, in cycles.
    pub phase: f64,
    /// Depth of the steady plane.
    pub static_value: f64,
}

impl Default for SwayParams {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            reverse: false,
            smooth: true,
            looped: true,
            phase: 0.0,
            static_value: 0.3,
        }
    }
}

impl SwayParams {
    /// Vertical sway on [`Target::OffsetY`].
    pub fn vertical(&self) -> Preset {
        self.preset("vertical", Target::OffsetY)
    }

    /// Horizontal sway on [`Target::OffsetX`].
    pub fn horizontal(&self) -> Preset {
        self.preset("horizontal", Target::OffsetX)
    }

    fn preset(&self, name: &str, axis: Target) -> Preset {
        let k = 0.5 * self.intensity;
        let sway = if self.looped {
            oscillate(axis, k, self.phase, 0.0, self.smooth)
        } else {
            ramp(axis, -k, k, self.smooth)
        };
        finish(
            name,
            self.reverse,
            vec![sway, set(Target::Static, self.static_value)],
        )
    }
}

/// Camera orbits the plane at `depth`, which stays fixed and in focus.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OrbitalParams {
    /// Orbit radius factor.
    pub intensity: f64,
    /// Depth of the pivot plane.
    pub depth: f64,
    /// Run time backwards.
    pub reverse: bool,
}

impl Default for OrbitalParams {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            depth: 0.5,
            reverse: false,
        }
    }
}

impl OrbitalParams {
    /// Build the `orbital` preset.
    pub fn preset(&self) -> Preset {
        let k = 0.5 * self.intensity;
        finish(
            "orbital",
            self.reverse,
            vec![
                set(Target::Static, self.depth),
                set(Target::Focus, self.depth),
                Component::new(
                    Target::OffsetX,
                    Curve::Sine {
                        amplitude: k,
                        cycles: 1.0,
                        phase: 0.0,
                        bias: 0.0,
                    },
                ),
                Component::new(
                    Target::Isometric,
                    Curve::Cosine {
                        amplitude: k / 2.0,
                        cycles: 1.0,
                        phase: 0.0,
                        bias: 0.5,
                    },
                ),
            ],
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/presets.rs"]
mod tests;
