//! Generation workflow: option resolution, output targets and orchestration
//!
//! [`request::resolve`] turns process inputs into a [`GenerationRequest`],
//! [`FileTarget`] locates each starter file and [`Scaffolder`] drives the
//! batch.

pub mod orchestrator;
pub mod request;
pub mod rules;
pub mod target;

pub use orchestrator::*;
pub use request::{GenerationRequest, ParentPath, RequestOverrides, resolve};
pub use target::*;
