pub(crate) mod apply;
pub(crate) mod spec;
