/// Daily scheduled posting
pub mod daily_post;
/// Completion request construction
pub mod generator;
/// Health check endpoints
pub mod health;
/// Weekday marketing guidance
pub mod prompts;
