use crate::utils::error::{AssetError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
    pub filename: Option<String>,
    pub create_dirs: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AssetError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AssetError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output.as_ref()?.dir.as_deref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.output.as_ref()?.filename.as_deref()
    }

    pub fn create_dirs(&self) -> Option<bool> {
        self.output.as_ref()?.create_dirs
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }

    pub fn log_format(&self) -> Option<LogFormat> {
        self.logging.as_ref()?.format
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = self.output_dir() {
            validation::validate_path("output.dir", &dir.to_string_lossy())?;
        }
        if let Some(filename) = self.filename() {
            validation::validate_filename("output.filename", filename)?;
        }
        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", level, LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[output]
dir = "./public/css"
filename = "overlay.css"
create_dirs = true

[logging]
level = "warn"
format = "json"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output_dir(), Some(Path::new("./public/css")));
        assert_eq!(config.filename(), Some("overlay.css"));
        assert_eq!(config.create_dirs(), Some(true));
        assert_eq!(config.log_level(), Some("warn"));
        assert_eq!(config.log_format(), Some(LogFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_has_no_values() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.output_dir().is_none());
        assert!(config.filename().is_none());
        assert!(config.create_dirs().is_none());
        assert!(config.log_format().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MODAL_FIXES_TEST_DIR", "/srv/dashboard/css");

        let toml_content = r#"
[output]
dir = "${MODAL_FIXES_TEST_DIR}"
filename = "${MODAL_FIXES_UNSET_VAR}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_dir(), Some(Path::new("/srv/dashboard/css")));
        assert_eq!(config.filename(), Some("${MODAL_FIXES_UNSET_VAR}"));

        std::env::remove_var("MODAL_FIXES_TEST_DIR");
    }

    #[test]
    fn test_invalid_toml_is_toml_error() {
        let result = FileConfig::from_toml_str("[output\ndir = 1");
        assert!(matches!(result, Err(AssetError::TomlError(_))));
    }

    #[test]
    fn test_config_validation() {
        let nested = FileConfig::from_toml_str("[output]\nfilename = \"css/modal.css\"\n").unwrap();
        assert!(nested.validate().is_err());

        let bad_level = FileConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nfilename = \"from-file.css\"\n")
            .unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.filename(), Some("from-file.css"));
    }
}
