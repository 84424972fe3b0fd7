//! Game error types

use arcade_engine::config::ConfigError;
use thiserror::Error;

/// Errors raised while setting up a game
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
