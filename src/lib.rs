//! Stock CSV analytics: moving averages and dividend statistics over
//! historical price data held in memory for the process lifetime.

pub mod analyzer;
pub mod config;
pub mod loader;
pub mod model;
pub mod utils;
