//! Discrete UI state and the presentation values springs derive from it.

pub mod chrome;
pub mod state;
