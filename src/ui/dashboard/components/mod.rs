//! Dashboard component modules

pub mod activity;
pub mod chart;
pub mod footer;
pub mod header;
pub mod logs;
