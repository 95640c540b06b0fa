//! Scroll observation: the past-threshold flag and one-shot viewport triggers.

pub mod tracker;
pub mod trigger;
