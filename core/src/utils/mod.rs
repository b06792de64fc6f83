pub(crate) mod encoding;
pub(crate) mod error;
pub(crate) mod logging;
pub(crate) mod strings;
