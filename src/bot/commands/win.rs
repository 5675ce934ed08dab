use teloxide::types::ChatId;

use crate::bot::outbound::MessageSink;
use crate::config::Config;
use crate::error::BotError;
use crate::services::generator::PostGenerator;

/// Winning-horse announcement, restricted to the command chat. The reply
/// goes back into the chat the command came from.
pub async fn handle_win(
    sink: &dyn MessageSink,
    generator: &PostGenerator,
    config: &Config,
    origin: ChatId,
    details: &str,
) -> Result<(), BotError> {
    if origin.0 != config.command_chat_id {
        tracing::debug!("Ignoring /win from unauthorized chat {}", origin.0);
        return Ok(());
    }

    let Some(announcement) = generator.announce_winner(details).await? else {
        tracing::debug!("No horse details supplied, skipping announcement");
        return Ok(());
    };

    sink.send_text(origin, &announcement).await
}
