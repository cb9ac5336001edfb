use crate::foundation::error::{FlexError, FlexResult};

/// Render parameter animated by a component.
///
/// Serialized with the renderer's snake_case identifiers (`offset_x`); the PascalCase
/// names (`OffsetX`) are accepted on input too.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Animates nothing; sampled values are discarded.
    #[default]
    #[serde(alias = "Nothing")]
    Nothing,
    /// Parallax depth height.
    #[serde(alias = "Height")]
    Height,
    /// Static focal plane.
    #[serde(alias = "Static")]
    Static,
    /// Focus plane.
    #[serde(alias = "Focus")]
    Focus,
    /// Camera zoom.
    #[serde(alias = "Zoom")]
    Zoom,
    /// Isometric (orthographic blend) factor.
    #[serde(alias = "Isometric")]
    Isometric,
    /// Dolly distance.
    #[serde(alias = "Dolly")]
    Dolly,
    /// Horizontal projection center.
    #[serde(alias = "CenterX")]
    CenterX,
    /// Vertical projection center.
    #[serde(alias = "CenterY")]
    CenterY,
    /// Horizontal ray origin.
    #[serde(alias = "OriginX")]
    OriginX,
    /// Vertical ray origin.
    #[serde(alias = "OriginY")]
    OriginY,
    /// Horizontal camera offset.
    #[serde(alias = "OffsetX")]
    OffsetX,
    /// Vertical camera offset.
    #[serde(alias = "OffsetY")]
    OffsetY,
}

impl Target {
    /// Every target, in declaration order.
    pub const ALL: [Target; 13] = [
        Target::Nothing,
        Target::Height,
        Target::Static,
        Target::Focus,
        Target::Zoom,
        Target::Isometric,
        Target::Dolly,
        Target::CenterX,
        Target::CenterY,
        Target::OriginX,
        Target::OriginY,
        Target::OffsetX,
        Target::OffsetY,
    ];

    /// Renderer identifier (`offset_x`).
    pub fn id(self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Height => "height",
            Self::Static => "static",
            Self::Focus => "focus",
            Self::Zoom => "zoom",
            Self::Isometric => "isometric",
            Self::Dolly => "dolly",
            Self::CenterX => "center_x",
            Self::CenterY => "center_y",
            Self::OriginX => "origin_x",
            Self::OriginY => "origin_y",
            Self::OffsetX => "offset_x",
            Self::OffsetY => "offset_y",
        }
    }

    /// Display name (`OffsetX`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Nothing => "Nothing",
            Self::Height => "Height",
            Self::Static => "Static",
            Self::Focus => "Focus",
            Self::Zoom => "Zoom",
            Self::Isometric => "Isometric",
            Self::Dolly => "Dolly",
            Self::CenterX => "CenterX",
            Self::CenterY => "CenterY",
            Self::OriginX => "OriginX",
            Self::OriginY => "OriginY",
            Self::OffsetX => "OffsetX",
            Self::OffsetY => "OffsetY",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Target {
    type Err = FlexError;

    fn from_str(s: &str) -> FlexResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s) || t.id() == s)
            .ok_or_else(|| FlexError::validation(format!("unknown target '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/target.rs"]
mod tests;
