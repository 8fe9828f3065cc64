//! Create, populate and safely tear down temporary directories.

pub mod fs_op;
pub mod logging;
pub mod settings;
pub mod temp_dir;

pub use crate::fs_op::error::TempDirError;
pub use crate::settings::Settings;
pub use crate::temp_dir::TemporaryDirectory;
