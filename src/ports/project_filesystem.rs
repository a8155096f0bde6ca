//! Project filesystem port definition.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading inputs and writing generated files in the project directory.
pub trait ProjectFilesystem {
    /// Read a text file. `~/` expands to the home directory and relative paths
    /// resolve against the project root. Reads are not confined to the root.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;

    /// Write `content` to `path` relative to the project root, creating parent
    /// directories. Paths escaping the root are rejected.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
