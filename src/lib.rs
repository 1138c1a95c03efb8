pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod scoring;
pub mod telemetry;
