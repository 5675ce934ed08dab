pub mod message;

use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::config::Config;
use crate::services::generator::PostGenerator;

/// Result type shared by all dispatcher endpoints.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub struct BotHandler {
    pub config: Arc<Config>,
    pub generator: Arc<PostGenerator>,
}

impl BotHandler {
    pub fn new(config: Arc<Config>, generator: Arc<PostGenerator>) -> Self {
        Self { config, generator }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let config = self.config.clone();
        let generator = self.generator.clone();
        let config_channel = self.config.clone();
        let generator_channel = self.generator.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let config = config.clone();
                        let generator = generator.clone();
                        async move { message::command_handler(bot, msg, cmd, config, generator).await }
                    }),
            )
            // Commands arrive as channel posts when the bot sits in a channel
            .branch(
                Update::filter_channel_post()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let config = config_channel.clone();
                        let generator = generator_channel.clone();
                        async move { message::command_handler(bot, msg, cmd, config, generator).await }
                    }),
            )
    }
}
