//! Daily scheduled promo post.
//!
//! One timezone-aware cron job per process lifetime. The job body never
//! propagates an error: a failed day is logged and the next day's trigger
//! stays armed.

use chrono::{DateTime, Duration as ChronoDuration, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use std::time::Duration;
use teloxide::{prelude::*, Bot};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::bot::outbound::MessageSink;
use crate::config::Config;
use crate::error::BotError;
use crate::services::generator::PostGenerator;
use crate::utils::retry::retry_with_backoff;

/// Provider calls are retried this many times before a day is given up.
pub const MAX_ATTEMPTS: u32 = 5;
/// First retry delay; doubles after each failed attempt.
pub const INITIAL_BACKOFF_MS: u64 = 1000;

pub struct DailyPostService {
    bot: Bot,
    generator: Arc<PostGenerator>,
    config: Arc<Config>,
    scheduler: JobScheduler,
}

impl DailyPostService {
    pub async fn new(
        bot: Bot,
        generator: Arc<PostGenerator>,
        config: Arc<Config>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            generator,
            config,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let hour = self.config.post_hour;
        let minute = self.config.post_minute;
        let timezone = self.config.post_timezone;
        let cron = cron_expression(hour, minute);

        let bot = self.bot.clone();
        let generator = self.generator.clone();
        let config = self.config.clone();

        let post_job = Job::new_async_tz(cron.as_str(), timezone, move |_uuid, _l| {
            let bot = bot.clone();
            let generator = generator.clone();
            let config = config.clone();
            Box::pin(async move {
                if let Err(e) = post_daily_update(&bot, &generator, &config).await {
                    tracing::error!("Scheduled post failed: {e}");
                }
            })
        })?;

        self.scheduler.add(post_job).await?;
        self.scheduler.start().await?;

        match next_fire_utc(Utc::now(), timezone, hour, minute, 0) {
            Some(next) => tracing::info!(
                "Daily post scheduled for {hour:02}:{minute:02} {timezone}, next fire at {next}"
            ),
            None => tracing::warn!("Could not compute the next fire time for {timezone}"),
        }

        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    /// Manual trigger, same path as the cron job.
    pub async fn post_now(&self) -> Result<(), BotError> {
        post_daily_update(&self.bot, &self.generator, &self.config).await
    }
}

/// Generate today's post (with retry) and deliver it to the announcement
/// chat. Shared by the cron job and the /sendmessage command.
pub async fn post_daily_update(
    sink: &dyn MessageSink,
    generator: &PostGenerator,
    config: &Config,
) -> Result<(), BotError> {
    let post = retry_with_backoff(
        MAX_ATTEMPTS,
        Duration::from_millis(INITIAL_BACKOFF_MS),
        || generator.daily_post(),
    )
    .await?;

    sink.send_text(ChatId(config.announce_chat_id), &post).await
}

/// Six-field cron expression firing once a day at the given wall-clock time.
pub fn cron_expression(hour: u32, minute: u32) -> String {
    format!("0 {minute} {hour} * * *")
}

/// The next instant at which the wall clock in `tz` reaches the target
/// time, strictly after `after`. Local times skipped by a DST jump are
/// passed over; ambiguous ones resolve to the earlier offset. Returns
/// `None` only for degenerate inputs (no such wall-clock time within a
/// year).
pub fn next_fire_utc(
    after: DateTime<Utc>,
    tz: Tz,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<DateTime<Utc>> {
    let mut date = after.with_timezone(&tz).date_naive();

    for _ in 0..=366 {
        if let Some(naive) = date.and_hms_opt(hour, minute, second) {
            let candidate = match tz.from_local_datetime(&naive) {
                LocalResult::Single(dt) => Some(dt),
                LocalResult::Ambiguous(earliest, _) => Some(earliest),
                LocalResult::None => None,
            };

            if let Some(local) = candidate {
                let utc = local.with_timezone(&Utc);
                if utc > after {
                    return Some(utc);
                }
            }
        }

        date = date + ChronoDuration::days(1);
    }

    None
}
