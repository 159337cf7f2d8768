//! CLI command implementations.

pub(crate) mod assistant;
pub(crate) mod classes;
pub(crate) mod predict;
