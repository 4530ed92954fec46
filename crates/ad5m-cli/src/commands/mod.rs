//! Command implementations for ad5m-cli

pub mod process;

pub use process::run_process;
