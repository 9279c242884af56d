//! Template roles known to the scaffolder.
//!
//! The scaffolder renders a small, closed set of templates. Each role has a
//! stable name used inside the compiled template set and a file name used
//! when the set is read from the bundle or from a custom template directory.
//!
//! # Examples
//!
//! ```
//! use cmdgen::core::templates::TemplateRole;
//!
//! let role = TemplateRole::Starter;
//! assert_eq!(role.file_name(), "starter.rs.tera");
//! assert_eq!(role.to_string(), "starter");
//! ```

// Internal imports (std, crate)
use std::fmt;

/// A template the scaffolder knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateRole {
    /// Body of a newly generated source file for one name
    Starter,
    /// Registration snippet printed once per name when no parent is given
    Registration,
    /// Registration snippet printed once for a whole batch under a parent
    RegistrationWithParent,
}

impl TemplateRole {
    /// Returns the role name as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Registration => "registration",
            Self::RegistrationWithParent => "registration_with_parent",
        }
    }

    /// File name of this role inside a template directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Starter => "starter.rs.tera",
            Self::Registration => "registration.rs.tera",
            Self::RegistrationWithParent => "registration_with_parent.rs.tera",
        }
    }

    /// Returns an iterator over every role a template set must provide
    pub fn all() -> impl Iterator<Item = Self> {
        use TemplateRole::*;
        [Starter, Registration, RegistrationWithParent].into_iter()
    }
}

impl fmt::Display for TemplateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
