//! Core building blocks: errors, string helpers and templates.

pub mod error;
pub mod templates;
pub mod utils;

pub use error::{Result, ScaffoldError};
