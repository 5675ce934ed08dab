use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::env;

/// Process configuration, read once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    /// Absent keys are tolerated here; the completion client reports the
    /// problem on the first generation attempt instead.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    /// Chat the restricted commands are honored from.
    pub command_chat_id: i64,
    /// Chat the generated posts are delivered to.
    pub announce_chat_id: i64,
    pub post_hour: u32,
    pub post_minute: u32,
    pub post_timezone: Tz,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let openai_model = env::var("OPENAI_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| "gpt-4".to_string());

        let command_chat_id = env::var("COMMAND_CHAT_ID")
            .unwrap_or_else(|_| "-1001925815386".to_string())
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid COMMAND_CHAT_ID"))?;

        let announce_chat_id = env::var("ANNOUNCE_CHAT_ID")
            .unwrap_or_else(|_| "-1001874617075".to_string())
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid ANNOUNCE_CHAT_ID"))?;

        let post_hour: u32 = env::var("POST_HOUR")
            .unwrap_or_else(|_| "8".to_string())
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid POST_HOUR"))?;
        if post_hour > 23 {
            return Err(anyhow!("POST_HOUR must be between 0 and 23"));
        }

        let post_minute: u32 = env::var("POST_MINUTE")
            .unwrap_or_else(|_| "30".to_string())
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid POST_MINUTE"))?;
        if post_minute > 59 {
            return Err(anyhow!("POST_MINUTE must be between 0 and 59"));
        }

        let post_timezone: Tz = env::var("POST_TIMEZONE")
            .unwrap_or_else(|_| "Australia/Sydney".to_string())
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid POST_TIMEZONE"))?;

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            openai_api_key,
            openai_model,
            command_chat_id,
            announce_chat_id,
            post_hour,
            post_minute,
            post_timezone,
            http_port,
        })
    }
}
