pub mod config;
pub mod fetcher;
pub mod logging;
pub mod runner;
