use std::path::{Path, PathBuf};
use std::fmt;
use tracing::debug;

use crate::fs_op::remove::{remove_tree, RemoveError};
use crate::fs_op::stat;

/// Errors returned when creating directories.
#[derive(Debug)]
pub enum CreateError {
    Io(std::io::Error),
    AlreadyExists(PathBuf),
    Remove(RemoveError),
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateError::Io(e) => write!(f, "IO error: {}", e),
            CreateError::AlreadyExists(p) => write!(f, "already exists: {:?}", p),
            CreateError::Remove(e) => write!(f, "could not clear existing path: {}", e),
        }
    }
}

impl std::error::Error for CreateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CreateError::Io(e) => Some(e),
            CreateError::Remove(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CreateError {
    fn from(e: std::io::Error) -> Self {
        CreateError::Io(e)
    }
}

impl From<RemoveError> for CreateError {
    fn from(e: RemoveError) -> Self {
        CreateError::Remove(e)
    }
}

/// Create a brand-new directory at `path`, including missing parents.
///
/// If anything already occupies `path` (a dangling symlink counts) the call
/// fails with `AlreadyExists` and leaves it untouched, unless `force` is set,
/// in which case the existing entry is removed recursively first.
pub fn create_fresh_dir<P: AsRef<Path>>(path: P, force: bool) -> Result<(), CreateError> {
    let p = path.as_ref();
    if stat::exists(p) {
        if !force {
            return Err(CreateError::AlreadyExists(p.to_path_buf()));
        }
        debug!("force: clearing existing {}", p.display());
        remove_tree(p)?;
    }
    create_dir_all(p)
}

/// Create directory and parents.
pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<(), CreateError> {
    std::fs::create_dir_all(path.as_ref()).map_err(CreateError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn fresh_dir_creates_parents() {
        let td = tempdir().unwrap();
        let dir = td.path().join("a/b");
        create_fresh_dir(&dir, false).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn existing_dir_is_rejected_without_force() {
        let td = tempdir().unwrap();
        let dir = td.path().join("taken");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("keep.txt"), b"x").unwrap();

        let err = create_fresh_dir(&dir, false).unwrap_err();
        assert!(matches!(err, CreateError::AlreadyExists(ref p) if p == &dir));
        assert!(dir.join("keep.txt").is_file(), "existing data must survive");
    }

    #[test]
    fn force_replaces_existing_file_and_dir() {
        let td = tempdir().unwrap();
        let dir = td.path().join("taken");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("old.txt"), b"x").unwrap();

        create_fresh_dir(&dir, true).unwrap();
        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

        let file = td.path().join("was_a_file");
        fs::write(&file, b"x").unwrap();
        create_fresh_dir(&file, true).unwrap();
        assert!(file.is_dir());
    }
}
