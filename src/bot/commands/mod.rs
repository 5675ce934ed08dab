pub mod send_message;
pub mod win;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "ProPunter promo bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Generate today's promo post and publish it")]
    SendMessage,
    #[command(description = "Alias for /sendmessage")]
    Post,
    #[command(description = "Announce a winning horse")]
    Win { details: String },
}
