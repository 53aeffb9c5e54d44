use std::path::PathBuf;

/// Result of writing the stylesheet once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes_written: usize,
    pub replaced_existing: bool,
}

/// What a write would do, without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritePlan {
    pub path: PathBuf,
    pub bytes: usize,
    pub target_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Match,
    Missing,
    Differs { expected_len: usize, actual_len: usize },
}

impl VerifyOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, VerifyOutcome::Match)
    }
}
