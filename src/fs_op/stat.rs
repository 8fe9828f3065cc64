use std::fs;
use std::path::Path;

/// Lightweight classification of a filesystem path's kind.
///
/// Classification uses the link metadata (`lstat`), so a symbolic link is
/// reported as `Symlink` whether or not its target exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist (or could not be inspected).
    NotFound,
    /// The path is a symbolic link; the target is never consulted.
    Symlink,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file, directory nor link
    /// (for example: socket, FIFO, block device).
    Other,
}

impl PathType {
    /// Classify `path` and return its `PathType`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let md = match fs::symlink_metadata(path.as_ref()) {
            Ok(md) => md,
            Err(_) => return PathType::NotFound,
        };
        let ft = md.file_type();
        if ft.is_symlink() {
            PathType::Symlink
        } else if ft.is_dir() {
            PathType::Directory
        } else if ft.is_file() {
            PathType::File
        } else {
            PathType::Other
        }
    }
}

/// Return `true` if anything, including a dangling symlink, occupies `path`.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) != PathType::NotFound
}

/// Return `true` if the provided `path` is a directory (links are not followed).
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}
