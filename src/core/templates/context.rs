//! Render contexts handed to the templates.

use serde::Serialize;
use tera::Context;

use crate::core::error::{Result, ScaffoldError};

/// Context for a template that renders a single name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub name: String,
    /// Parent command segments, empty when there is no parent
    pub parent: Vec<String>,
    pub org: String,
    pub project: String,
}

/// Context for the batch registration snippet under a parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationContext {
    pub names: Vec<String>,
    pub parent: Vec<String>,
    pub org: String,
    pub project: String,
}

impl RenderContext {
    /// Convert into a Tera context
    pub fn to_tera_context(&self) -> Result<Context> {
        Context::from_serialize(self).map_err(|e| ScaffoldError::render(e.to_string()))
    }
}

impl RegistrationContext {
    /// Convert into a Tera context
    pub fn to_tera_context(&self) -> Result<Context> {
        Context::from_serialize(self).map_err(|e| ScaffoldError::render(e.to_string()))
    }
}
