use thiserror::Error;
use std::path::PathBuf;

use crate::fs_op::create::CreateError;
use crate::fs_op::path::PathError;
use crate::fs_op::remove::RemoveError;

/// Errors produced by `TemporaryDirectory` operations.
#[derive(Error, Debug)]
pub enum TempDirError {
    /// A name or relative path was rejected before touching the filesystem.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] PathError),

    /// The target directory already exists and `force()` was not requested.
    #[error("path already exists: `{}`", .0.display())]
    AlreadyExists(PathBuf),

    /// A sub-path was requested before `create()` materialised the directory.
    #[error("temporary directory has not been created yet")]
    NotCreated,

    /// A forced overwrite could not clear the existing entry.
    #[error(transparent)]
    Remove(#[from] RemoveError),

    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CreateError> for TempDirError {
    fn from(e: CreateError) -> Self {
        match e {
            CreateError::Io(e) => TempDirError::Io(e),
            CreateError::AlreadyExists(p) => TempDirError::AlreadyExists(p),
            CreateError::Remove(e) => TempDirError::Remove(e),
        }
    }
}
