//! `stockroom` command-line driver.

pub mod config;
pub mod demo;

pub use config::Config;
