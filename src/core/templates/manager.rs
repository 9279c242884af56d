//! Template loading and rendering for the scaffolder.
//!
//! A [`TemplateSet`] compiles every [`TemplateRole`] into one Tera instance,
//! either from the sources bundled in the binary or from a user supplied
//! template directory. Loading checks that each role is present, so a
//! missing template surfaces as a named load error instead of a failed
//! lookup halfway through a batch.
//!
//! # Filters
//!
//! Templates have access to these filters besides Tera's built-ins:
//! - `upper_case`: `list_users` -> `LIST_USERS`
//! - `upper_camel_case`: `list_users` -> `ListUsers`
//! - `lower_camel_case`: `list_users` -> `listUsers`

// Internal imports (std, crate)
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::error::{Result, ScaffoldError, error_chain};
use crate::core::utils::{to_lower_camel_case, to_upper_camel_case, to_upper_case};

use super::{RegistrationContext, RenderContext, TemplateRole, embedded_source};

// External imports (alphabetized)
use tera::{Context, Tera, Value};
use tracing::debug;

/// Compiled, immutable set of the scaffolder's templates
#[derive(Debug)]
pub struct TemplateSet {
    tera: Tera,
}

impl TemplateSet {
    /// Compile the templates bundled into the binary
    pub fn embedded() -> Result<Self> {
        let sources = TemplateRole::all()
            .map(|role| (role, embedded_source(role).to_string()))
            .collect();
        Self::from_sources(sources)
    }

    /// Compile the templates found in `dir`, one file per role
    ///
    /// # Errors
    /// Returns [`ScaffoldError::TemplateLoad`] naming the first role whose
    /// file is missing or unreadable, or the first template that fails to parse.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut sources = Vec::new();
        for role in TemplateRole::all() {
            let path = dir.join(role.file_name());
            let content = fs::read_to_string(&path).map_err(|e| {
                ScaffoldError::template_load(format!(
                    "could not read {role} template '{}': {e}",
                    path.display()
                ))
            })?;
            sources.push((role, content));
        }
        debug!(dir = %dir.display(), "Read custom templates");
        Self::from_sources(sources)
    }

    /// Compile role sources into a template set
    pub fn from_sources(sources: Vec<(TemplateRole, String)>) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        register_filters(&mut tera);

        tera.add_raw_templates(
            sources
                .iter()
                .map(|(role, source)| (role.as_str(), source.as_str())),
        )
        .map_err(|e| ScaffoldError::template_load(error_chain(&e)))?;

        for role in TemplateRole::all() {
            if !tera.get_template_names().any(|name| name == role.as_str()) {
                return Err(ScaffoldError::template_load(format!(
                    "missing {role} template ({})",
                    role.file_name()
                )));
            }
            debug!(%role, "Loaded template");
        }

        Ok(Self { tera })
    }

    /// Render the starter source file for one name
    pub fn render_starter(&self, context: &RenderContext) -> Result<String> {
        self.render(TemplateRole::Starter, &context.to_tera_context()?)
    }

    /// Render the registration snippet for one name without a parent
    pub fn render_registration(&self, context: &RenderContext) -> Result<String> {
        self.render(TemplateRole::Registration, &context.to_tera_context()?)
    }

    /// Render the combined registration snippet for a batch under a parent
    pub fn render_registration_with_parent(&self, context: &RegistrationContext) -> Result<String> {
        self.render(
            TemplateRole::RegistrationWithParent,
            &context.to_tera_context()?,
        )
    }

    fn render(&self, role: TemplateRole, context: &Context) -> Result<String> {
        Ok(self.tera.render(role.as_str(), context)?)
    }
}

fn register_filters(tera: &mut Tera) {
    tera.register_filter("upper_case", string_filter("upper_case", to_upper_case));
    tera.register_filter(
        "upper_camel_case",
        string_filter("upper_camel_case", to_upper_camel_case),
    );
    tera.register_filter(
        "lower_camel_case",
        string_filter("lower_camel_case", to_lower_camel_case),
    );
}

/// Wrap a string conversion as a Tera filter
fn string_filter(
    name: &'static str,
    convert: fn(&str) -> String,
) -> impl Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync {
    move |value: &Value, _args: &HashMap<String, Value>| match value.as_str() {
        Some(s) => Ok(Value::String(convert(s))),
        None => Err(tera::Error::msg(format!(
            "filter `{name}` expects a string, got {value}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context(name: &str, parent: &[&str]) -> RenderContext {
        RenderContext {
            name: name.to_string(),
            parent: parent.iter().map(|s| s.to_string()).collect(),
            org: "acme".to_string(),
            project: "tool".to_string(),
        }
    }

    fn sources(starter: &str) -> Vec<(TemplateRole, String)> {
        vec![
            (TemplateRole::Starter, starter.to_string()),
            (TemplateRole::Registration, "reg {{ name }}".to_string()),
            (
                TemplateRole::RegistrationWithParent,
                "{% for name in names %}{{ name }};{% endfor %}".to_string(),
            ),
        ]
    }

    #[test]
    fn test_embedded_templates_load() {
        assert!(TemplateSet::embedded().is_ok());
    }

    #[test]
    fn test_filters_are_registered() {
        let set = TemplateSet::from_sources(sources(
            "{{ name | upper_case }} {{ name | upper_camel_case }} {{ name | lower_camel_case }}",
        ))
        .unwrap();
        let out = set.render_starter(&context("list_users", &[])).unwrap();
        assert_eq!(out, "LIST_USERS ListUsers listUsers");
    }

    #[test]
    fn test_malformed_template_is_a_load_error() {
        let err = TemplateSet::from_sources(sources("{% if name %}unterminated")).unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateLoad(_)));
    }

    #[test]
    fn test_missing_role_is_a_load_error() {
        let mut partial = sources("{{ name }}");
        partial.retain(|(role, _)| *role != TemplateRole::RegistrationWithParent);
        let err = TemplateSet::from_sources(partial).unwrap_err();
        assert!(err.to_string().contains("registration_with_parent"));
    }

    #[test]
    fn test_render_error_is_not_a_load_error() {
        let set = TemplateSet::from_sources(sources("{{ undefined_variable }}")).unwrap();
        let err = set.render_starter(&context("widget", &[])).unwrap_err();
        assert!(matches!(err, ScaffoldError::Render(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_filter_rejects_non_string() {
        let set = TemplateSet::from_sources(sources("{{ parent | upper_case }}")).unwrap();
        let err = set.render_starter(&context("widget", &["foo"])).unwrap_err();
        assert!(err.to_string().contains("upper_case"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let set = TemplateSet::embedded().unwrap();
        let ctx = context("widget", &["foo", "bar"]);
        assert_eq!(
            set.render_starter(&ctx).unwrap(),
            set.render_starter(&ctx).unwrap()
        );
    }

    #[test]
    fn test_from_dir_reads_every_role() {
        let dir = TempDir::new().unwrap();
        for (role, source) in sources("custom {{ name }}") {
            fs::write(dir.path().join(role.file_name()), source).unwrap();
        }
        let set = TemplateSet::from_dir(dir.path()).unwrap();
        assert_eq!(
            set.render_starter(&context("widget", &[])).unwrap(),
            "custom widget"
        );
    }

    #[test]
    fn test_from_dir_names_missing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("starter.rs.tera"), "{{ name }}").unwrap();
        let err = TemplateSet::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateLoad(_)));
        assert!(err.to_string().contains("registration.rs.tera"));
    }
}
