//! Core functionality shared by every system: logging macros and math types.

#[macro_use]
pub mod utils;
pub mod math;
