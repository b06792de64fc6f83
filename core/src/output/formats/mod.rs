pub(crate) mod csv;
pub(crate) mod html;
pub(crate) mod json;
pub(crate) mod line;
pub(crate) mod table;
