//! Command-line driver for rpcdoc.

pub mod args;
pub mod driver;
