//! driftguard-cli library
//!
//! This module exposes the internal functionality of driftguard-cli for testing purposes.

pub mod cli;
pub mod logging;

// Make commands module available for internal tests only
#[doc(hidden)]
pub mod commands;

pub use cli::{Cli, Format};

#[cfg(test)]
mod tests;
