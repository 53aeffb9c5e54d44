use crate::core::{ConfigProvider, Storage};
use crate::utils::error::{AssetError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    create_dirs: bool,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            create_dirs: false,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.output_dir()).with_create_dirs(config.create_dirs())
    }

    /// Create missing parent directories before writing.
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|source| AssetError::ReadError {
            path: full_path,
            source,
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if self.create_dirs {
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).map_err(|source| AssetError::WriteError {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(&full_path, data).map_err(|source| AssetError::WriteError {
            path: full_path,
            source,
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}
