//! Runtime error kinds for bot operations.
//!
//! Startup-time failures go through `anyhow` in `main`; everything the bot
//! does after startup reports one of these.

use thiserror::Error;

/// Errors produced by generation, delivery and configuration lookups.
#[derive(Debug, Error)]
pub enum BotError {
    /// A required piece of configuration is missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The completion provider call failed.
    #[error("generation failed: {0}")]
    Generation(String),

    /// An outbound send to the chat platform failed.
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BotError>;
