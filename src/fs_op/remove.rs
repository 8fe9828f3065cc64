use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::fs_op::symlink::remove_symlink;

/// Error returned when an entry inside a tree could not be removed.
///
/// `path` names the entry that failed, which is not necessarily the root the
/// caller asked to remove.
#[derive(Debug, Error)]
#[error("failed to remove `{}`: {source}", .path.display())]
pub struct RemoveError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl RemoveError {
    fn new(path: &Path, source: io::Error) -> Self {
        RemoveError {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Recursively remove `path`.
///
/// - A symbolic link is unlinked and never followed, so broken links and
///   links pointing outside the tree are handled without touching the target.
/// - A missing path is success, including one that descends through a
///   regular file.
/// - Anything that is not a directory is unlinked.
/// - A directory has every entry (dot-files included) removed first, then the
///   directory itself. The first failure aborts the walk.
///
/// Entries that disappear while the walk is running are treated as removed.
///
/// # Examples
///
/// ```no_run
/// use scratch_dir::fs_op::remove::remove_tree;
/// remove_tree("/tmp/some_dir").expect("remove failed");
/// ```
pub fn remove_tree(path: impl AsRef<Path>) -> Result<(), RemoveError> {
    let p = path.as_ref();

    let md = match fs::symlink_metadata(p) {
        Ok(md) => md,
        Err(e) if is_absent(&e) => return Ok(()),
        Err(e) => return Err(RemoveError::new(p, e)),
    };
    let ft = md.file_type();

    if ft.is_symlink() {
        return ignore_missing(remove_symlink(p)).map_err(|e| RemoveError::new(p, e));
    }

    if !ft.is_dir() {
        return ignore_missing(fs::remove_file(p)).map_err(|e| RemoveError::new(p, e));
    }

    // The iterator is dropped at the end of this block, on success and on
    // every early return, before the directory itself is removed.
    {
        let entries = match fs::read_dir(p) {
            Ok(entries) => entries,
            Err(e) if is_absent(&e) => return Ok(()),
            Err(e) => return Err(RemoveError::new(p, e)),
        };
        for entry in entries {
            let entry = entry.map_err(|e| RemoveError::new(p, e))?;
            remove_tree(entry.path())?;
        }
    }

    ignore_missing(fs::remove_dir(p)).map_err(|e| RemoveError::new(p, e))
}

/// Remove `path` recursively, reporting the outcome as a boolean.
///
/// Returns `true` when nothing is left at `path` (including when nothing was
/// there to begin with) and `false` when some entry could not be removed. The
/// failing entry is logged at `warn` level.
pub fn delete_directory(path: impl AsRef<Path>) -> bool {
    let p = path.as_ref();
    match remove_tree(p) {
        Ok(()) => {
            debug!("removed {}", p.display());
            true
        }
        Err(e) => {
            warn!("could not delete {}: {}", p.display(), e);
            false
        }
    }
}

// A path below a regular file (`ENOTDIR`) cannot exist either.
fn is_absent(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}

fn ignore_missing(res: io::Result<()>) -> io::Result<()> {
    match res {
        Err(e) if is_absent(&e) => Ok(()),
        other => other,
    }
}
