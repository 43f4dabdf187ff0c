use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Input is not valid UTF-8 text")]
    InvalidInput(#[from] std::str::Utf8Error),
    #[error("Config Error: {0}")]
    Config(#[from] ConfigError),
}
