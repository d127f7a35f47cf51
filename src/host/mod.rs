pub(crate) mod batch;
pub(crate) mod collection;
pub(crate) mod registry;
