//! Static sample content shown on the dashboard.

pub mod dataset;
