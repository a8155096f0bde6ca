use crate::domain::AppError;
use crate::ports::ProjectFilesystem;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory project directory.
#[derive(Clone, Default)]
pub struct MemoryFilesystem {
    pub inputs: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub written: Arc<Mutex<Vec<(PathBuf, String)>>>,
    pub fail_writes_to: Option<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.inputs.lock().unwrap().insert(path.into(), content.into());
        self
    }

    pub fn failing_write(mut self, path: impl Into<PathBuf>) -> Self {
        self.fail_writes_to = Some(path.into());
        self
    }

    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.written.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }

    pub fn content_of(&self, path: &str) -> Option<String> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p == Path::new(path))
            .map(|(_, c)| c.clone())
    }
}

impl ProjectFilesystem for MemoryFilesystem {
    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        self.inputs.lock().unwrap().get(path).cloned().ok_or_else(|| AppError::EnvFileRead {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.fail_writes_to.as_deref() == Some(path) {
            return Err(AppError::WriteFailed {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.written.lock().unwrap().push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
