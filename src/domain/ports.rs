use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Blocking byte storage addressed by file name.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Creates the file or truncates existing content.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn exists(&self, path: &str) -> bool;
    fn resolve(&self, path: &str) -> PathBuf;
}

pub trait ConfigProvider {
    fn output_dir(&self) -> &Path;
    fn filename(&self) -> &str;
    fn create_dirs(&self) -> bool;
}
