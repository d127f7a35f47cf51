pub(crate) mod attributes;
pub(crate) mod delegate;
pub(crate) mod engine;
