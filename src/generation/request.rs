//! Option resolution: turns process inputs and flags into a [`GenerationRequest`].
//!
//! Defaults come from the invocation itself: the project name from the last
//! segment of argv[0] and the module path from the directory holding the
//! running executable. Both are passed in explicitly so resolution stays a
//! plain function of its inputs.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, ScaffoldError};
use crate::generation::rules::{parse_parent_segments, validate_names};

/// Organization used when `--org` is not given
pub const DEFAULT_ORG: &str = "acme";

/// Values supplied on the command line; `None` falls back to a default
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    pub names: Vec<String>,
    pub parent: Option<String>,
    pub org: Option<String>,
    pub project: Option<String>,
    pub module_path: Option<PathBuf>,
    pub overwrite: bool,
    pub debug: bool,
    pub template_dir: Option<PathBuf>,
}

/// Validated parent command path such as `foo/bar`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentPath(Vec<String>);

impl ParentPath {
    /// Parse a slash separated path; an empty string means "no parent"
    pub fn parse(path: &str) -> Result<Option<Self>> {
        if path.is_empty() {
            return Ok(None);
        }
        parse_parent_segments(path).map(|segments| Some(Self(segments)))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The path as a relative filesystem path
    pub fn to_path_buf(&self) -> PathBuf {
        self.0.iter().collect()
    }
}

impl fmt::Display for ParentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// Fully resolved inputs for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Target names in the order given; never empty
    pub names: Vec<String>,
    pub parent: Option<ParentPath>,
    pub org: String,
    pub project: String,
    /// Root under which `internal/` is created
    pub module_path: PathBuf,
    pub overwrite: bool,
    pub debug: bool,
    /// Custom template directory replacing the bundled templates
    pub template_dir: Option<PathBuf>,
}

impl GenerationRequest {
    /// Parent segments, empty when there is no parent
    pub fn parent_segments(&self) -> Vec<String> {
        self.parent
            .as_ref()
            .map(|p| p.segments().to_vec())
            .unwrap_or_default()
    }
}

/// Project name derived from argv[0]
pub fn default_project(argv0: &str) -> String {
    Path::new(argv0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Resolve the request from overrides, argv[0] and the current executable path
///
/// Validation runs before anything touches the filesystem. The executable
/// path is only needed when `module_path` is not overridden; if it is needed
/// and the lookup failed, the lookup error is returned.
pub fn resolve(
    overrides: RequestOverrides,
    argv0: &str,
    current_exe: io::Result<PathBuf>,
) -> Result<GenerationRequest> {
    validate_names(&overrides.names)?;

    let parent = match overrides.parent.as_deref() {
        Some(path) => ParentPath::parse(path)?,
        None => None,
    };

    let module_path = match overrides.module_path {
        Some(path) => path,
        None => {
            let exe = current_exe.map_err(ScaffoldError::ExecutablePath)?;
            exe.parent().map(Path::to_path_buf).ok_or_else(|| {
                ScaffoldError::ExecutablePath(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("'{}' has no parent directory", exe.display()),
                ))
            })?
        }
    };

    Ok(GenerationRequest {
        names: overrides.names,
        parent,
        org: overrides.org.unwrap_or_else(|| DEFAULT_ORG.to_string()),
        project: overrides
            .project
            .unwrap_or_else(|| default_project(argv0)),
        module_path,
        overwrite: overrides.overwrite,
        debug: overrides.debug,
        template_dir: overrides.template_dir,
    })
}
