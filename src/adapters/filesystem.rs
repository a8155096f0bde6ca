//! Filesystem adapter for the `ProjectFilesystem` port.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// Filesystem-backed store rooted at the project directory.
///
/// Writes are validated against the root to prevent directory traversal.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
    home: Option<PathBuf>,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root, home: dirs::home_dir() }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    pub fn with_home(mut self, home: PathBuf) -> Self {
        self.home = Some(home);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Expand `~/` and anchor relative paths at the root.
    fn resolve_input(&self, path: &Path) -> PathBuf {
        if let (Ok(rest), Some(home)) = (path.strip_prefix("~"), self.home.as_ref()) {
            return home.join(rest);
        }
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }

    /// Validates that a path (after logical normalization) is within the root.
    fn validate_path_within_root(&self, path: &Path) -> Result<PathBuf, AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) || normalized_path == normalized_root {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }

        Ok(normalized_path)
    }
}

impl ProjectFilesystem for FilesystemStore {
    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        let resolved = self.resolve_input(path);
        debug!("Reading {}", resolved.display());
        fs::read_to_string(&resolved)
            .map_err(|source| AppError::EnvFileRead { path: path.to_path_buf(), source })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let target = self.validate_path_within_root(path)?;
        let write = || -> io::Result<()> {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, content)
        };
        write().map_err(|source| AppError::WriteFailed { path: path.to_path_buf(), source })?;
        debug!("Wrote {}", target.display());
        Ok(())
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
