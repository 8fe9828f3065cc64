//! Small utilities for working with symbolic links.
//!
//! These helpers centralize symlink-specific behavior so the recursive delete
//! never has to reason about platform distinctions. They return `io::Result`
//! and propagate underlying OS errors unchanged.

use std::fs;
use std::io;
use std::path::Path;

/// Create a symbolic link at `dst` that points to `src`.
///
/// Behaviour:
/// - On Unix this delegates to `std::os::unix::fs::symlink`.
/// - On Windows this chooses `symlink_dir` or `symlink_file` depending on
///   whether `src` looks like a directory. A missing `src` yields a file link.
pub fn create_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::symlink as unix_symlink;
        unix_symlink(src, dst)
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::{symlink_dir, symlink_file};

        let use_dir = src.metadata().map(|m| m.is_dir()).unwrap_or(false);
        if use_dir {
            symlink_dir(src, dst)
        } else {
            symlink_file(src, dst)
        }
    }
}

/// Remove the symbolic link at `path` without touching its target.
///
/// On Unix `remove_file` unlinks every kind of link. On Windows a directory
/// link must go through `remove_dir`; the target may be gone, so the file
/// variant is tried first and the directory variant second.
pub fn remove_symlink(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        fs::remove_file(path)
    }

    #[cfg(windows)]
    {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(file_err) => fs::remove_dir(path).map_err(|_| file_err),
        }
    }
}
