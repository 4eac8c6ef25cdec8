//! Build-time configuration.

pub mod kernel;
