use crate::assets::MODAL_FIXES_CSS;
use crate::core::Storage;
use crate::domain::model::{VerifyOutcome, WritePlan, WriteReport};
use crate::utils::error::{AssetError, Result};

pub struct AssetWriter<S: Storage> {
    storage: S,
    filename: String,
    content: &'static str,
}

impl<S: Storage> AssetWriter<S> {
    pub fn new(storage: S, filename: impl Into<String>) -> Self {
        Self::with_content(storage, filename, MODAL_FIXES_CSS)
    }

    pub fn with_content(storage: S, filename: impl Into<String>, content: &'static str) -> Self {
        Self {
            storage,
            filename: filename.into(),
            content,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn plan(&self) -> WritePlan {
        WritePlan {
            path: self.storage.resolve(&self.filename),
            bytes: self.content.len(),
            target_exists: self.storage.exists(&self.filename),
        }
    }

    /// Writes the stylesheet, replacing whatever the target held before.
    pub fn write(&self) -> Result<WriteReport> {
        let path = self.storage.resolve(&self.filename);
        let replaced_existing = self.storage.exists(&self.filename);

        tracing::debug!(
            "Writing {} bytes to {} (existing: {})",
            self.content.len(),
            path.display(),
            replaced_existing
        );

        self.storage
            .write_file(&self.filename, self.content.as_bytes())?;

        tracing::info!("📁 Stylesheet written to {}", path.display());

        Ok(WriteReport {
            path,
            bytes_written: self.content.len(),
            replaced_existing,
        })
    }

    /// Compares the file on disk with the bundled stylesheet. Never writes.
    pub fn check(&self) -> Result<VerifyOutcome> {
        if !self.storage.exists(&self.filename) {
            tracing::debug!("{} does not exist", self.filename);
            return Ok(VerifyOutcome::Missing);
        }

        let actual = self.storage.read_file(&self.filename)?;
        if actual == self.content.as_bytes() {
            Ok(VerifyOutcome::Match)
        } else {
            Ok(VerifyOutcome::Differs {
                expected_len: self.content.len(),
                actual_len: actual.len(),
            })
        }
    }

    /// Like [`check`](Self::check), but anything other than a match is an error.
    pub fn ensure_current(&self) -> Result<()> {
        let path = self.storage.resolve(&self.filename);
        match self.check()? {
            VerifyOutcome::Match => return Ok(()),
            VerifyOutcome::Missing => tracing::warn!("{} does not exist", path.display()),
            VerifyOutcome::Differs {
                expected_len,
                actual_len,
            } => tracing::warn!(
                "{} differs: expected {} bytes, found {}",
                path.display(),
                expected_len,
                actual_len
            ),
        }
        Err(AssetError::Mismatch { path })
    }
}
