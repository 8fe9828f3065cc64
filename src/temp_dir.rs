//! The `TemporaryDirectory` handle.
//!
//! A handle is configured through chainable `&mut self` methods, materialised
//! with [`TemporaryDirectory::create`], and torn down with
//! [`TemporaryDirectory::delete`] or reset with [`TemporaryDirectory::empty`].
//!
//! ```no_run
//! use scratch_dir::TemporaryDirectory;
//!
//! # fn main() -> Result<(), scratch_dir::TempDirError> {
//! let mut dir = TemporaryDirectory::new();
//! dir.name("build-cache")?.force().create()?;
//! let report = dir.path_to("reports/summary.txt")?;
//! std::fs::write(&report, "ok")?;
//! assert!(dir.delete());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::fs_op::create::{create_dir_all, create_fresh_dir};
use crate::fs_op::error::TempDirError;
use crate::fs_op::path::{
    directory_part, join_relative, normalize_location, random_name, validate_name,
};
use crate::fs_op::remove::delete_directory;
use crate::fs_op::stat;
use crate::settings::Settings;

/// One managed temporary directory and its configuration.
#[derive(Debug)]
pub struct TemporaryDirectory {
    location: PathBuf,
    name: Option<String>,
    force: bool,
    created: bool,
    delete_when_dropped: bool,
}

impl Default for TemporaryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl TemporaryDirectory {
    /// A handle rooted in the system temporary directory.
    pub fn new() -> Self {
        Self::in_location(std::env::temp_dir())
    }

    /// A handle rooted in `location`. An empty location falls back to the
    /// system temporary directory.
    pub fn in_location(location: impl AsRef<Path>) -> Self {
        let mut dir = TemporaryDirectory {
            location: PathBuf::new(),
            name: None,
            force: false,
            created: false,
            delete_when_dropped: false,
        };
        dir.location(location);
        dir
    }

    /// Construct a handle in `location` and create it immediately.
    pub fn make(location: impl AsRef<Path>) -> Result<Self, TempDirError> {
        let mut dir = Self::in_location(location);
        dir.create()?;
        Ok(dir)
    }

    /// Build an uncreated handle from configured defaults.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut dir = Self::in_location(settings.location_or_default());
        dir.force = settings.force;
        dir.delete_when_dropped = settings.delete_when_dropped;
        dir
    }

    /// Set the leaf directory name.
    ///
    /// Renaming a created handle detaches it: the old directory is left on
    /// disk and the handle must be created again before use.
    pub fn name(&mut self, value: &str) -> Result<&mut Self, TempDirError> {
        let name = validate_name(value)?;
        if self.name.as_deref() != Some(name.as_str()) {
            self.detach();
            self.name = Some(name);
        }
        Ok(self)
    }

    /// Set the parent directory the temporary directory is created in.
    ///
    /// Like `name()`, moving a created handle detaches it.
    pub fn location(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let normalized = normalize_location(path.as_ref());
        let location = if normalized.as_os_str().is_empty() {
            std::env::temp_dir()
        } else {
            normalized
        };
        if location != self.location {
            self.detach();
            self.location = location;
        }
        self
    }

    /// Replace whatever already exists at the target path on `create()`.
    pub fn force(&mut self) -> &mut Self {
        self.force = true;
        self
    }

    /// Remove the directory tree when this handle is dropped.
    pub fn delete_when_dropped(&mut self) -> &mut Self {
        self.delete_when_dropped = true;
        self
    }

    /// Materialise the directory on disk.
    ///
    /// A random name is chosen when none was set. Fails with
    /// `AlreadyExists` if the target is occupied and `force()` was not
    /// requested; existing data is left alone in that case.
    pub fn create(&mut self) -> Result<&mut Self, TempDirError> {
        let name = self.name.get_or_insert_with(random_name).clone();
        let target = self.location.join(name);
        create_fresh_dir(&target, self.force)?;
        self.created = true;
        debug!("created temporary directory {}", target.display());
        Ok(self)
    }

    /// Absolute path of the managed directory.
    pub fn path(&self) -> Result<PathBuf, TempDirError> {
        self.created_root()
    }

    /// Absolute path of `relative` inside the managed directory.
    ///
    /// Missing directories along the way are created. When the last segment
    /// looks like a file name (`notes.txt`) only its parent is created, so the
    /// caller can write the file straight away; otherwise the full path is
    /// created as a directory.
    pub fn path_to(&self, relative: &str) -> Result<PathBuf, TempDirError> {
        let root = self.created_root()?;
        let target = join_relative(&root, relative)?;
        let dir = directory_part(&target);
        if !stat::is_dir(dir) {
            create_dir_all(dir)?;
            debug!("created {}", dir.display());
        }
        Ok(target)
    }

    /// Recursively remove the managed directory.
    ///
    /// Returns `true` when nothing is left, including when the directory
    /// never existed, and `false` if some entry could not be removed.
    pub fn delete(&mut self) -> bool {
        let Some(target) = self.full_path() else {
            return true;
        };
        let deleted = delete_directory(&target);
        if deleted {
            self.created = false;
        }
        deleted
    }

    /// Remove everything inside the managed directory, keeping the
    /// directory itself.
    pub fn empty(&mut self) -> bool {
        let Some(target) = self.full_path() else {
            warn!("empty() called on a temporary directory without a name");
            return false;
        };
        if !delete_directory(&target) {
            return false;
        }
        match create_dir_all(&target) {
            Ok(()) => {
                self.created = true;
                debug!("emptied {}", target.display());
                true
            }
            Err(e) => {
                self.created = false;
                warn!("could not recreate {}: {}", target.display(), e);
                false
            }
        }
    }

    /// Whether anything currently occupies the resolved path.
    pub fn exists(&self) -> bool {
        self.full_path().map(stat::exists).unwrap_or(false)
    }

    /// `location/name`, or `None` until a name has been set or generated.
    pub fn full_path(&self) -> Option<PathBuf> {
        self.name.as_ref().map(|n| self.location.join(n))
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn get_location(&self) -> &Path {
        &self.location
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    fn detach(&mut self) {
        if self.created {
            if let Some(p) = self.full_path() {
                debug!("handle no longer tracks {}", p.display());
            }
            self.created = false;
        }
    }

    fn created_root(&self) -> Result<PathBuf, TempDirError> {
        match self.full_path() {
            Some(p) if self.created => Ok(p),
            _ => Err(TempDirError::NotCreated),
        }
    }
}

impl Drop for TemporaryDirectory {
    fn drop(&mut self) {
        if self.delete_when_dropped && self.created && !self.delete() {
            if let Some(p) = self.full_path() {
                warn!("failed to clean up {} on drop", p.display());
            }
        }
    }
}
