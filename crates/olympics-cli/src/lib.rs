//! CLI library components for the Olympic Games analytics.

pub mod logging;
pub mod pipeline;
pub mod reports;
