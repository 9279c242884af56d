//! Template system for the scaffolder.
//!
//! Provides the closed set of template roles, the render contexts passed to
//! them, the sources bundled into the binary and the compiled [`TemplateSet`].

pub mod context;
pub mod embedded;
pub mod kind;
pub mod manager;

pub use context::*;
pub use embedded::*;
pub use kind::*;
pub use manager::*;
