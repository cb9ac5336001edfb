pub(crate) mod chain;
