//! # File Gateway
//!
//! Where cart content comes from. The pipeline only needs "give me the whole
//! file as a string", so the seam is a single method.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Source of cart file content.
pub trait FileGateway {
    /// Reads the entire file at `path`.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsGateway;

impl FileGateway for FsGateway {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Serves content from memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    files: HashMap<PathBuf, String>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a file.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl FileGateway for MemoryGateway {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}
