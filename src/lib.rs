pub mod config;
pub mod discord;
pub mod lighting;
pub mod logging;
pub mod schedule;
pub mod store;
