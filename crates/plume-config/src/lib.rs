pub mod config;
pub mod error;

pub use config::{JournalMode, Settings};
pub use error::ConfigError;
