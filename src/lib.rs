pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod ui;
pub mod version;

pub use config::{ChangelogConfig, Mode, RawConfig};
pub use error::{ConfigError, Result};
