//! Templates bundled into the binary at compile time.
//!
//! The sources live under `templates/subcmd/` and are pulled in with
//! `include_str!`, so the scaffolder works right after `cargo install`
//! without any template files on disk.

use super::TemplateRole;

/// Bundled starter template
const STARTER: &str = include_str!("../../../templates/subcmd/starter.rs.tera");
/// Bundled per-name registration snippet
const REGISTRATION: &str = include_str!("../../../templates/subcmd/registration.rs.tera");
/// Bundled batch registration snippet for the parent case
const REGISTRATION_WITH_PARENT: &str =
    include_str!("../../../templates/subcmd/registration_with_parent.rs.tera");

/// Returns the bundled source for a role
pub fn embedded_source(role: TemplateRole) -> &'static str {
    match role {
        TemplateRole::Starter => STARTER,
        TemplateRole::Registration => REGISTRATION,
        TemplateRole::RegistrationWithParent => REGISTRATION_WITH_PARENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_is_bundled() {
        for role in TemplateRole::all() {
            assert!(
                !embedded_source(role).trim().is_empty(),
                "bundled template for {role} is empty"
            );
        }
    }

    #[test]
    fn test_registration_with_parent_iterates_names() {
        assert!(embedded_source(TemplateRole::RegistrationWithParent).contains("for name in names"));
    }
}
