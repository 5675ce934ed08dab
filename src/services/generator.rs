//! Builds completion requests for the daily promo post and the
//! winning-horse announcement.

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

use crate::error::BotError;
use crate::llm::{ChatMessage, CompletionClient, CompletionRequest};
use crate::services::prompts::PromptTable;

const DAILY_POST_MAX_TOKENS: u32 = 2000;
const ANNOUNCEMENT_MAX_TOKENS: u32 = 256;

const MODERATOR_PERSONA: &str =
    "You are a Telegram moderator of a Horse Betting Group called ProPunter.";
const COMMENTATOR_PERSONA: &str = "You are a horse racing commentator.";

/// Generates promotional copy through a [`CompletionClient`].
pub struct PostGenerator {
    client: Arc<dyn CompletionClient>,
    prompts: PromptTable,
    model: String,
    timezone: Tz,
}

impl PostGenerator {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        prompts: PromptTable,
        model: impl Into<String>,
        timezone: Tz,
    ) -> Self {
        Self {
            client,
            prompts,
            model: model.into(),
            timezone,
        }
    }

    /// Generate today's promo post, with "today" taken from the configured
    /// zone rather than the host clock's zone.
    pub async fn daily_post(&self) -> Result<String, BotError> {
        let today = Utc::now().with_timezone(&self.timezone).date_naive();
        self.daily_post_on(today).await
    }

    /// Generate the promo post for the given calendar date.
    pub async fn daily_post_on(&self, date: NaiveDate) -> Result<String, BotError> {
        let day = date.weekday();
        let guidance = self.prompts.guidance(day).ok_or_else(|| {
            BotError::Configuration(format!("no weekday guidance configured for {day}"))
        })?;

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(MODERATOR_PERSONA),
                ChatMessage::user(format!(
                    "Create a Telegram post ONLY based on the following guidance: {guidance} \
                     Feel free to create new content where it makes sense in line with the \
                     guidance. Don't make up statistics."
                )),
            ],
            temperature: 1.0,
            max_tokens: DAILY_POST_MAX_TOKENS,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        };

        self.client.complete(request).await
    }

    /// Generate a short winning-horse announcement. Blank details skip the
    /// provider call entirely and produce no announcement.
    pub async fn announce_winner(&self, details: &str) -> Result<Option<String>, BotError> {
        let details = details.trim();
        if details.is_empty() {
            return Ok(None);
        }

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(COMMENTATOR_PERSONA),
                ChatMessage::user(format!(
                    "Come up with a message to announce a winning horse in 15 words or less. \
                     {details}"
                )),
            ],
            temperature: 1.0,
            max_tokens: ANNOUNCEMENT_MAX_TOKENS,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        };

        self.client.complete(request).await.map(Some)
    }
}
