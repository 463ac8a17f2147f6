use crate::domain::ports::Storage;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at the site directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        fs::read_to_string(self.base_path.join(path))
    }

    // Pages are rewritten in place, so the parent directory always exists.
    fn write_string(&self, path: &str, content: &str) -> std::io::Result<()> {
        fs::write(self.base_path.join(path), content)
    }
}
