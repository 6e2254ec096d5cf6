pub mod config;
pub mod error;
pub mod models;
pub mod client;
pub mod checks;
pub mod runner;
