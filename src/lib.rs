pub mod assets;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use assets::{modal_fixes_css, write_status, DEFAULT_FILENAME, MODAL_FIXES_CSS};
pub use config::{cli::LocalStorage, Settings};
pub use core::writer::AssetWriter;
pub use utils::error::{AssetError, Result};
