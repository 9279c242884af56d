//! Output locations for generated starter files

use std::path::{Path, PathBuf};

use crate::generation::request::ParentPath;

/// Directory under the module path that holds generated code
pub const INTERNAL_DIR: &str = "internal";

/// Extension of generated starter files
pub const STARTER_EXTENSION: &str = "rs";

/// Where the starter file for one name goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    /// `<module_path>/internal/[<parent>/]<name>`
    pub dir: PathBuf,
    /// `<dir>/<name>.rs`
    pub file: PathBuf,
}

impl FileTarget {
    pub fn new(module_path: &Path, parent: Option<&ParentPath>, name: &str) -> Self {
        let mut dir = module_path.join(INTERNAL_DIR);
        if let Some(parent) = parent {
            dir.push(parent.to_path_buf());
        }
        dir.push(name);
        let file = dir.join(format!("{name}.{STARTER_EXTENSION}"));
        Self { dir, file }
    }
}
