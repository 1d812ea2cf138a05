pub mod analytics;
pub mod config;
pub mod constants;
pub mod models;
pub mod physics;
