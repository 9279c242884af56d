//! Output service implementations

use std::path::Path;

use crate::core::error::Result;

pub mod filesystem_output;

pub use filesystem_output::*;

/// Destination for generated files
pub trait OutputService {
    /// Create `path` and any missing parents; succeeds if it already exists
    fn ensure_directory(&self, path: &Path) -> Result<()>;

    /// Fail with [`ScaffoldError::FileConflict`](crate::core::ScaffoldError::FileConflict)
    /// when `path` exists and `overwrite` is off
    fn check_conflict(&self, path: &Path, overwrite: bool) -> Result<()>;

    /// Write `content` to `path`
    ///
    /// Without `overwrite` an existing file is left untouched and
    /// [`ScaffoldError::FileConflict`](crate::core::ScaffoldError::FileConflict)
    /// is returned. With it the file is truncated and rewritten.
    fn write_file(&self, path: &Path, content: &str, overwrite: bool) -> Result<()>;
}
