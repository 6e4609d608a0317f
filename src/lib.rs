// Main library entry point for tsguard.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;
