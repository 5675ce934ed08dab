#![allow(clippy::unwrap_used)]

use propunter_bot::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    for var in [
        "TELEGRAM_BOT_TOKEN",
        "OPENAI_API_KEY",
        "OPENAI_MODEL",
        "COMMAND_CHAT_ID",
        "ANNOUNCE_CHAT_ID",
        "POST_HOUR",
        "POST_MINUTE",
        "POST_TIMEZONE",
        "HTTP_PORT",
    ] {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("OPENAI_API_KEY", "sk-test");
    env::set_var("OPENAI_MODEL", "gpt-4-turbo");
    env::set_var("COMMAND_CHAT_ID", "-100123");
    env::set_var("ANNOUNCE_CHAT_ID", "-100456");
    env::set_var("POST_HOUR", "9");
    env::set_var("POST_MINUTE", "15");
    env::set_var("POST_TIMEZONE", "Europe/Berlin");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.openai_model, "gpt-4-turbo");
    assert_eq!(config.command_chat_id, -100123);
    assert_eq!(config.announce_chat_id, -100456);
    assert_eq!(config.post_hour, 9);
    assert_eq!(config.post_minute, 15);
    assert_eq!(config.post_timezone, chrono_tz::Europe::Berlin);
    assert_eq!(config.http_port, 8080);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    // Only set required token, let others use defaults
    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.openai_model, "gpt-4");
    assert_eq!(config.command_chat_id, -1001925815386);
    assert_eq!(config.announce_chat_id, -1001874617075);
    assert_eq!(config.post_hour, 8);
    assert_eq!(config.post_minute, 30);
    assert_eq!(config.post_timezone, chrono_tz::Australia::Sydney);
    assert_eq!(config.http_port, 3000);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_missing_api_key_is_not_fatal() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    // The bot must start without an API key; the failure only surfaces on
    // the first generation attempt.
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    let config = Config::from_env().unwrap();
    assert!(config.openai_api_key.is_none());

    // An empty key counts as missing too
    env::set_var("OPENAI_API_KEY", "   ");
    let config = Config::from_env().unwrap();
    assert!(config.openai_api_key.is_none());

    clear_env();
}

#[test]
fn test_config_invalid_timezone() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("POST_TIMEZONE", "Atlantis/Lost_City");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid POST_TIMEZONE"));

    clear_env();
}

#[test]
fn test_config_schedule_time_bounds() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    env::set_var("POST_HOUR", "24");
    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("POST_HOUR must be between 0 and 23"));

    env::set_var("POST_HOUR", "8");
    env::set_var("POST_MINUTE", "60");
    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("POST_MINUTE must be between 0 and 59"));

    clear_env();
}

#[test]
fn test_config_invalid_chat_id() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("COMMAND_CHAT_ID", "not_a_number");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid COMMAND_CHAT_ID"));

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    clear_env();
}

#[test]
fn test_config_empty_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "");
    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}
