//! File I/O for ad5m-post
//!
//! Reads sliced gcode as UTF-8 text and rewrites it in place without ever
//! leaving a half-written file behind.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
