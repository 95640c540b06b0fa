//! Boundary with the host rendering environment: events, listener lifetimes, geometry.

pub mod events;
pub mod layout;
