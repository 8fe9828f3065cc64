//! Filesystem primitives behind `TemporaryDirectory`.

pub mod create;
pub mod error;
pub mod path;
pub mod remove;
pub mod stat;
pub mod symlink;
