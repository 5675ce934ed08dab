//! # ProPunter Promo Bot Main Entry Point
//!
//! Initializes logging, loads configuration, wires the generator to the
//! completion client, starts the daily post scheduler, and runs the
//! Telegram bot alongside the health check server.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use propunter_bot::bot::handlers::BotHandler;
use propunter_bot::config::Config;
use propunter_bot::llm::OpenAiClient;
use propunter_bot::services::daily_post::DailyPostService;
use propunter_bot::services::generator::PostGenerator;
use propunter_bot::services::health::HealthService;
use propunter_bot::services::prompts::PromptTable;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "propunter_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    info!("Starting ProPunter Promo Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Schedule: {:02}:{:02} {}, HTTP Port: {}",
        config.post_hour, config.post_minute, config.post_timezone, config.http_port
    );

    // Wire the generator to the completion provider
    let client = OpenAiClient::new(config.openai_api_key.clone())
        .map_err(|e| anyhow::anyhow!("Failed to create completion client: {e}"))?;
    let generator = Arc::new(PostGenerator::new(
        Arc::new(client),
        PromptTable::default(),
        config.openai_model.clone(),
        config.post_timezone,
    ));

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(config.clone(), generator.clone());
    info!("Telegram bot initialized successfully");

    // Initialize and start the daily post scheduler
    info!("Initializing daily post scheduler...");
    let mut post_service = match DailyPostService::new(bot.clone(), generator, config.clone()).await
    {
        Ok(service) => {
            info!("Daily post scheduler initialized successfully");
            service
        }
        Err(e) => {
            tracing::error!("Failed to create daily post scheduler: {}", e);
            return Err(anyhow::anyhow!("Failed to create daily post scheduler: {}", e));
        }
    };

    if let Err(e) = post_service.start().await {
        tracing::error!("Failed to start daily post scheduler: {}", e);
    } else {
        info!("Daily post scheduler started successfully");
    }

    // Initialize health service
    let health_service = HealthService::new(config.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    // Stop the scheduler on shutdown
    if let Err(e) = post_service.stop().await {
        tracing::warn!("Error stopping daily post scheduler: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
