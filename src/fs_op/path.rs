use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Characters that may not appear in a directory name.
const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>', '\0'];

/// Errors that can occur when validating a user-supplied name or sub-path.
#[derive(Debug, PartialEq, Eq)]
pub enum PathError {
    Empty,
    Reserved(String),
    InvalidCharacters(String),
    Escapes(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "empty directory name"),
            PathError::Reserved(n) => write!(f, "reserved directory name: `{}`", n),
            PathError::InvalidCharacters(n) => {
                write!(f, "directory name `{}` contains invalid characters", n)
            }
            PathError::Escapes(p) => {
                write!(f, "relative path `{}` escapes the temporary directory", p)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Validate a leaf directory name and return it with surrounding whitespace
/// removed.
///
/// A valid name is exactly one path segment: not empty, not `.`/`..`, and
/// free of separators and characters that are unsafe on common filesystems.
pub fn validate_name(name: &str) -> Result<String, PathError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PathError::Empty);
    }
    if name.contains(FORBIDDEN_NAME_CHARS) {
        return Err(PathError::InvalidCharacters(name.to_string()));
    }
    if name == "." || name == ".." {
        return Err(PathError::Reserved(name.to_string()));
    }
    Ok(name.to_string())
}

/// Generate a collision-resistant directory name: 128 random bits as 32
/// lowercase hex characters.
pub fn random_name() -> String {
    format!("{:032x}", rand::random::<u128>())
}

/// Canonicalise a base location: trailing separators and doubled separators
/// are dropped, a bare root is kept. An empty input stays empty.
pub fn normalize_location(location: &Path) -> PathBuf {
    location.components().collect()
}

/// Join `relative` onto `base`, refusing anything that would leave `base`.
///
/// Leading and trailing separators of `relative` are ignored, as are `.`
/// segments. `..`, roots and drive prefixes are rejected.
pub fn join_relative(base: &Path, relative: &str) -> Result<PathBuf, PathError> {
    let trimmed = relative.trim_matches(|c| c == '/' || c == std::path::MAIN_SEPARATOR);
    let mut out = base.to_path_buf();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(segment) => out.push(segment),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(PathError::Escapes(relative.to_string()));
            }
        }
    }
    Ok(out)
}

/// Return `true` when a final path segment looks like a file name, i.e. it
/// contains a `.` after its first character (`file.txt`, `a.tar.gz`).
/// Dot-directories such as `.cache` do not count.
pub fn looks_like_file(segment: &OsStr) -> bool {
    segment
        .to_str()
        .map(|s| s.char_indices().any(|(i, c)| c == '.' && i > 0))
        .unwrap_or(false)
}

/// The directory that must exist before `path` can be used: `path` itself,
/// or its parent when the last segment looks like a file name.
pub fn directory_part(path: &Path) -> &Path {
    match (path.file_name(), path.parent()) {
        (Some(name), Some(parent)) if looks_like_file(name) => parent,
        _ => path,
    }
}

/// Expand a path beginning with `~` into one rooted at the user's home
/// directory. Returns `None` when the home directory cannot be determined.
pub fn expand_tilde(input: &str) -> Option<PathBuf> {
    // Accept both `HOME` (Unix) and `USERPROFILE` (Windows) for portability.
    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))?;
    let rest = input.trim_start_matches('~');
    let mut p = PathBuf::from(home);
    if !rest.is_empty() {
        let trimmed = rest.trim_start_matches(|c| c == '/' || c == '\\');
        p.push(trimmed);
    }
    Some(p)
}
