//! variable-insight library — backward data-flow analysis over a C# semantic oracle.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
