pub mod aggregate;
pub mod chart;
pub mod clean;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod pipeline;
