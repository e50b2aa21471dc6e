use std::env;

use log::{debug, error, info};

use crate::error::{BotError, Result};

/// Number of recent channel messages scanned by `/analyze` by default.
pub const DEFAULT_HISTORY_LIMIT: u8 = 50;

/// Discord returns at most this many messages per history request.
pub const MAX_HISTORY_LIMIT: u8 = 100;

/// Largest dice count `/roll` accepts by default.
pub const DEFAULT_MAX_DICE: u32 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub history_limit: u8,
    pub max_dice: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN").map_err(|e| {
            error!("Failed to load DISCORD_TOKEN from environment: {}", e);
            e
        })?;

        let history_limit = env::var("ANALYZE_HISTORY_LIMIT").ok();
        let history_limit =
            parse_history_limit(history_limit.as_deref()).inspect_err(|e| error!("{e}"))?;

        let max_dice = env::var("ROLL_MAX_DICE").ok();
        let max_dice = parse_max_dice(max_dice.as_deref()).inspect_err(|e| error!("{e}"))?;

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!("Analyze history limit: {}", history_limit);
        debug!("Roll max dice: {}", max_dice);

        Ok(Self {
            discord_token,
            history_limit,
            max_dice,
        })
    }
}

/// Parse `ANALYZE_HISTORY_LIMIT`, falling back to [`DEFAULT_HISTORY_LIMIT`] when unset.
pub fn parse_history_limit(raw: Option<&str>) -> Result<u8> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(DEFAULT_HISTORY_LIMIT);
    };

    match raw.parse::<u8>() {
        Ok(limit) if (1..=MAX_HISTORY_LIMIT).contains(&limit) => Ok(limit),
        _ => Err(BotError::Config(format!(
            "ANALYZE_HISTORY_LIMIT must be between 1 and {MAX_HISTORY_LIMIT}, got '{raw}'"
        ))),
    }
}

/// Parse `ROLL_MAX_DICE`, falling back to [`DEFAULT_MAX_DICE`] when unset.
pub fn parse_max_dice(raw: Option<&str>) -> Result<u32> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(DEFAULT_MAX_DICE);
    };

    match raw.parse::<u32>() {
        Ok(max) if max >= 1 => Ok(max),
        _ => Err(BotError::Config(format!(
            "ROLL_MAX_DICE must be a positive integer, got '{raw}'"
        ))),
    }
}
