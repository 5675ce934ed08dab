//! # ProPunter Promo Bot
//!
//! A Telegram bot for the ProPunter horse-betting channel. It generates
//! promotional copy from day-of-week marketing guidance via an
//! OpenAI-compatible completion API, posting on a daily schedule and on
//! demand through chat commands.
//!
//! ## Features
//! - Daily scheduled post at a fixed wall-clock time in a named time zone
//! - /sendmessage and /post for an immediate generate-and-publish
//! - /win for short winning-horse announcements
//! - Chat-restricted commands with silent failure semantics

/// Bot command handlers and update routing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Runtime error kinds
pub mod error;
/// Completion provider client and wire types
pub mod llm;
/// Background services: scheduling, generation, health
pub mod services;
/// Utility functions for retries
pub mod utils;
