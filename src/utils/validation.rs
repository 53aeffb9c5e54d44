use crate::utils::error::{AssetError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A bare file name: no directory components, not `.` or `..`.
pub fn validate_filename(field_name: &str, filename: &str) -> Result<()> {
    validate_non_empty_string(field_name, filename)?;
    validate_path(field_name, filename)?;

    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(_)), None) => Ok(()),
        _ => Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: filename.to_string(),
            reason: "Must be a file name without directory components".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(AssetError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.dir", ".").is_ok());
        assert!(validate_path("output.dir", "public/css").is_ok());
        assert!(validate_path("output.dir", "").is_err());
        assert!(validate_path("output.dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_filename() {
        assert!(validate_filename("output.filename", "modal-fixes.css").is_ok());
        assert!(validate_filename("output.filename", "   ").is_err());
        assert!(validate_filename("output.filename", "css/modal-fixes.css").is_err());
        assert!(validate_filename("output.filename", "..").is_err());
        assert!(validate_filename("output.filename", ".").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let levels = ["trace", "debug", "info", "warn", "error"];
        assert!(validate_one_of("logging.level", "warn", &levels).is_ok());
        assert!(validate_one_of("logging.level", "loud", &levels).is_err());
    }
}
