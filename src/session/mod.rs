//! The mounted dashboard and the scripted replay of host sessions.

pub mod dashboard;
pub mod script;
