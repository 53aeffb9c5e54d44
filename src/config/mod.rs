pub mod cli;
pub mod toml_config;

use crate::assets::DEFAULT_FILENAME;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
use toml_config::{FileConfig, LOG_LEVELS};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "modal-fixes")]
#[command(about = "Writes the dashboard modal CSS fixes to modal-fixes.css")]
pub struct CliConfig {
    /// Directory the stylesheet is written into [default: .]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// File name of the stylesheet [default: modal-fixes.css]
    #[arg(long)]
    pub filename: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Create the output directory if it does not exist
    #[arg(long)]
    pub create_dirs: bool,

    /// Compare the existing file with the bundled stylesheet instead of writing
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Effective settings after merging defaults, the config file and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub filename: String,
    pub create_dirs: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            filename: DEFAULT_FILENAME.to_string(),
            create_dirs: false,
            log_level: None,
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    pub fn merge_file(mut self, file: &FileConfig) -> Self {
        if let Some(dir) = file.output_dir() {
            self.output_dir = dir.to_path_buf();
        }
        if let Some(filename) = file.filename() {
            self.filename = filename.to_string();
        }
        if let Some(create_dirs) = file.create_dirs() {
            self.create_dirs = create_dirs;
        }
        if let Some(level) = file.log_level() {
            self.log_level = Some(level.to_string());
        }
        if let Some(format) = file.log_format() {
            self.log_format = format;
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn merge_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(filename) = &cli.filename {
            self.filename = filename.clone();
        }
        // a bare flag can only switch directory creation on
        if cli.create_dirs {
            self.create_dirs = true;
        }
        if let Some(format) = cli.log_format {
            self.log_format = format;
        }
        self
    }

    /// Defaults, then the config file named by `--config` (if any), then flags.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Settings::default();
        if let Some(path) = &cli.config {
            let file = FileConfig::from_file(path)?;
            file.validate()?;
            settings = settings.merge_file(&file);
        }
        Ok(settings.merge_cli(cli))
    }

    pub fn target_path(&self) -> PathBuf {
        self.output_dir.join(&self.filename)
    }
}

impl ConfigProvider for Settings {
    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn filename(&self) -> &str {
        &self.filename
    }

    fn create_dirs(&self) -> bool {
        self.create_dirs
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_dir", &self.output_dir.to_string_lossy())?;
        validation::validate_filename("filename", &self.filename)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("log_level", level, LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_behavior() {
        let settings = Settings::default();
        assert_eq!(settings.target_path(), Path::new("./modal-fixes.css"));
        assert!(!settings.create_dirs);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileConfig::from_toml_str(
            "[output]\ndir = \"public/css\"\ncreate_dirs = true\n[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let settings = Settings::default().merge_file(&file);

        assert_eq!(settings.output_dir, PathBuf::from("public/css"));
        assert_eq!(settings.filename, "modal-fixes.css");
        assert!(settings.create_dirs);
        assert_eq!(settings.log_level.as_deref(), Some("warn"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig::from_toml_str(
            "[output]\ndir = \"public/css\"\nfilename = \"from-file.css\"\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();
        let cli = CliConfig::parse_from(["modal-fixes", "--filename", "from-cli.css"]);

        let settings = Settings::default().merge_file(&file).merge_cli(&cli);

        assert_eq!(settings.output_dir, PathBuf::from("public/css"));
        assert_eq!(settings.filename, "from-cli.css");
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parses_flags() {
        let cli = CliConfig::parse_from([
            "modal-fixes",
            "-o",
            "out",
            "--create-dirs",
            "--dry-run",
            "--log-format",
            "json",
        ]);

        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(cli.create_dirs);
        assert!(cli.dry_run);
        assert!(!cli.check);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_check_conflicts_with_dry_run() {
        let result = CliConfig::try_parse_from(["modal-fixes", "--check", "--dry-run"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_filename_rejected() {
        let settings = Settings {
            filename: "../escape.css".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
