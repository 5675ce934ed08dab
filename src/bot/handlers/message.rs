use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{send_message, win, Command};
use crate::bot::handlers::HandlerResult;
use crate::config::Config;
use crate::services::generator::PostGenerator;

/// Dispatch one parsed command. Failures in the restricted commands are
/// logged and swallowed so the user never sees an error reply.
pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    config: Arc<Config>,
    generator: Arc<PostGenerator>,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "Hello!\n\nRun the /help command to see what I can do!",
            )
            .await?;
        }
        Command::SendMessage | Command::Post => {
            if let Err(e) =
                send_message::handle_send_message(&bot, &generator, &config, msg.chat.id).await
            {
                tracing::error!("Failed to publish the daily post: {e}");
            }
        }
        Command::Win { details } => {
            if let Err(e) = win::handle_win(&bot, &generator, &config, msg.chat.id, &details).await
            {
                tracing::error!("Failed to announce the winner: {e}");
            }
        }
    }
    Ok(())
}
