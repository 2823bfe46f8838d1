use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("TOML serialization error: {0}")]
    #[diagnostic(
        code(plume_config::toml_serialize),
        help("Check your settings structure for invalid values")
    )]
    TomlSerError(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    #[diagnostic(
        code(plume_config::toml_deserialize),
        help("Check your settings file syntax and structure")
    )]
    TomlDeError(#[from] toml::de::Error),

    #[error("Missing required settings key: {0}")]
    #[diagnostic(
        code(plume_config::missing_key),
        help("Set the key in your settings file or builder")
    )]
    MissingKey(&'static str),

    #[error("IO error: {0}")]
    #[diagnostic(code(plume_config::io))]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
