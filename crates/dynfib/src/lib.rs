//! dynfib library — configuration and the ownership-transfer driver.

pub mod app;
pub mod config;
pub mod errors;
pub mod report;
