pub(crate) mod attributes;
pub(crate) mod engine;
pub(crate) mod raw;
