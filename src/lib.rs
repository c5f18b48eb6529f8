pub mod config;
pub mod monitor;
pub mod report;
pub mod version;
