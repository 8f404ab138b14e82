//! Core types for choropleth class break computation
//!
//! This crate holds the pieces every other crate in the workspace shares:
//! the unified [`Error`] type, the [`Result`] alias, and the sample
//! validation and sorting helpers in [`utils`].

pub mod error;
pub mod utils;

pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
