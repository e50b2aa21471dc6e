use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Serenity error: {0}")]
    Serenity(Box<poise::serenity_prelude::Error>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Invalid dice: count {dice_count}, sides {sides} (both must be at least 1)")]
    InvalidDice { dice_count: i64, sides: i64 },

    #[error("Too many dice: requested {requested}, maximum is {max}")]
    TooManyDice { requested: u32, max: u32 },

    #[error("Invalid roll type: {0:?}")]
    InvalidRollType(String),

    #[error("No results to analyze")]
    NoResults,
}

impl From<poise::serenity_prelude::Error> for BotError {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        BotError::Serenity(Box::new(err))
    }
}

impl BotError {
    /// Returns a user-friendly error message suitable for displaying in Discord
    pub fn user_message(&self) -> String {
        match self {
            BotError::Serenity(_) => {
                "Sorry, I'm having trouble communicating with Discord right now. Please try again later.".to_string()
            }
            BotError::Config(_) | BotError::EnvVar(_) => {
                "Sorry, there's a configuration issue on my end. Please contact the bot administrator.".to_string()
            }
            BotError::InvalidDice { .. } => {
                "Number of sides and dice must be at least 1.".to_string()
            }
            BotError::TooManyDice { max, .. } => {
                format!("You can roll at most {max} dice at once.")
            }
            BotError::InvalidRollType(_) => {
                "Please provide a valid roll type (e.g., 'd20').".to_string()
            }
            BotError::NoResults => "No results found.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
