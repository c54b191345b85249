//! Entry-point wiring: configuration, the sample order, and its printout.

pub mod config;
pub mod demo;
pub mod summary;
