pub(crate) mod component;
pub(crate) mod motion;
pub(crate) mod presets;
pub(crate) mod target;
