pub mod client;
pub mod config;
pub mod discovery;
pub mod error;
pub mod model;
