use teloxide::types::ChatId;

use crate::bot::outbound::MessageSink;
use crate::config::Config;
use crate::error::BotError;
use crate::services::daily_post::post_daily_update;
use crate::services::generator::PostGenerator;

/// Immediate generate-and-publish, restricted to the command chat.
/// Requests from anywhere else are silently ignored.
pub async fn handle_send_message(
    sink: &dyn MessageSink,
    generator: &PostGenerator,
    config: &Config,
    origin: ChatId,
) -> Result<(), BotError> {
    if origin.0 != config.command_chat_id {
        tracing::debug!("Ignoring /sendmessage from unauthorized chat {}", origin.0);
        return Ok(());
    }

    post_daily_update(sink, generator, config).await
}
