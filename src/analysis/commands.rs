//! Poise slash command for analyzing recent roll results.

use std::fmt::Write;

use log::{debug, info};
use poise::CreateReply;
use poise::serenity_prelude::GetMessages;
use strum::VariantNames;

use crate::bot::Data;
use crate::error::{BotError, Result};
use crate::types::{RollType, StandardDie};

use super::extract::extract_results;
use super::stats::{AnalysisResult, analyze};

/// Context type for analysis commands.
type Context<'a> = poise::Context<'a, Data, BotError>;

/// Standard dice whose name starts with the typed prefix.
fn matching_roll_types(partial: &str) -> Vec<String> {
    let partial = partial.trim().to_lowercase();
    StandardDie::VARIANTS
        .iter()
        .filter(|name| name.starts_with(&partial))
        .map(ToString::to_string)
        .collect()
}

async fn autocomplete_roll_type(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    matching_roll_types(partial)
}

/// Render analysis statistics as a chat message.
pub fn format_analysis(roll_type: &RollType, analysis: &AnalysisResult) -> String {
    let mut summary = format!("📊 Analysis for roll type '{roll_type}':");
    let _ = write!(summary, "\nAverage: {:.2}", analysis.average);
    let _ = write!(summary, "\nMean: {:.2}", analysis.mean);
    let _ = write!(summary, "\nMode: {}", analysis.mode);
    summary
}

/// Analyze recent messages for a roll type and report average, mean and mode.
#[poise::command(slash_command, rename = "analyze")]
pub async fn analyze_command(
    ctx: Context<'_>,
    #[description = "The roll type to search for (e.g., 'd20')"]
    #[autocomplete = "autocomplete_roll_type"]
    roll_type: String,
) -> Result<()> {
    let roll_type: RollType = roll_type.parse()?;
    info!(
        "Starting analysis for roll type {} in channel {}",
        roll_type,
        ctx.channel_id()
    );

    ctx.defer().await?;

    let history_limit = ctx.data().history_limit();
    let messages = ctx
        .channel_id()
        .messages(ctx.http(), GetMessages::new().limit(history_limit))
        .await?;
    debug!("Fetched {} messages from channel", messages.len());

    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    let results = extract_results(contents.as_slice(), roll_type.as_str());

    match analyze(&results) {
        Ok(analysis) => {
            info!(
                "Analysis for {} complete over {} results: average {:.2}, mode {}",
                roll_type, analysis.sample_count, analysis.average, analysis.mode
            );
            ctx.say(format_analysis(&roll_type, &analysis)).await?;
        }
        Err(BotError::NoResults) => {
            info!("No results found for roll type {roll_type}");
            let reply = CreateReply::default()
                .content(format!("No results found for roll type '{roll_type}'."))
                .ephemeral(true);
            ctx.send(reply).await?;
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Get available analysis commands.
#[must_use]
pub fn analysis_commands() -> Vec<poise::Command<Data, BotError>> {
    vec![analyze_command()]
}
