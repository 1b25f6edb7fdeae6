pub mod config;
pub mod posts;
