pub mod tasks;
pub mod xml;
