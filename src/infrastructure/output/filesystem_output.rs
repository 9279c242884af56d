//! Filesystem-based output service implementation

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::core::error::{Result, ScaffoldError};

use super::OutputService;

/// Output service that writes starter files to the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemOutput;

impl FileSystemOutput {
    pub fn new() -> Self {
        Self
    }
}

impl OutputService for FileSystemOutput {
    fn ensure_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|source| ScaffoldError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })
    }

    fn check_conflict(&self, path: &Path, overwrite: bool) -> Result<()> {
        if !overwrite && path.exists() {
            return Err(ScaffoldError::FileConflict {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str, overwrite: bool) -> Result<()> {
        self.check_conflict(path, overwrite)?;

        // create_new also catches a file that appeared after the check
        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options.open(path).map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                ScaffoldError::FileConflict {
                    path: path.to_path_buf(),
                }
            } else {
                ScaffoldError::FileCreate {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| ScaffoldError::FileCreate {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), bytes = content.len(), "Wrote file");
        Ok(())
    }
}
