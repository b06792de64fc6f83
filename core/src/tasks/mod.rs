pub(crate) mod error;
pub(crate) mod normalize;
pub(crate) mod parser;
pub(crate) mod schedule;
pub(crate) mod xml;
