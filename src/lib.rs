pub mod classifier;
pub mod date_resolver;
pub mod digest;
pub mod discord;
pub mod error;
pub mod handler;
pub mod model;
pub mod schedule_api;
