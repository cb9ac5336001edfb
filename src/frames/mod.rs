pub(crate) mod expand;
