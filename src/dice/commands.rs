//! Poise slash commands for dice rolling.

use log::info;

use crate::bot::Data;
use crate::error::{BotError, Result};

use super::roller::{RollRequest, RollResult};

/// Context type for dice commands.
type Context<'a> = poise::Context<'a, Data, BotError>;

/// Validate raw slash command arguments into a roll request.
fn build_request(num_dice: i64, sides: i64, modifier: i64, max_dice: u32) -> Result<RollRequest> {
    let invalid = || BotError::InvalidDice {
        dice_count: num_dice,
        sides,
    };
    let dice_count = u32::try_from(num_dice).map_err(|_| invalid())?;
    let sides = u32::try_from(sides).map_err(|_| invalid())?;

    let request = RollRequest::new(dice_count, sides, modifier)?;
    if request.dice_count() > max_dice {
        return Err(BotError::TooManyDice {
            requested: request.dice_count(),
            max: max_dice,
        });
    }
    Ok(request)
}

/// Render a roll breakdown as a chat message.
pub fn format_roll(result: &RollResult) -> String {
    let rolls = result
        .rolls
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "🎲 You rolled: {rolls}\nModifier: {}\n**Total: {}**",
        result.modifier, result.total
    )
}

/// Roll dice and show every die, the modifier and the total.
#[poise::command(slash_command)]
pub async fn roll(
    ctx: Context<'_>,
    #[description = "The number of sides on the dice"]
    #[min = 1]
    sides: i64,
    #[description = "The number of dice to roll (default is 1)"]
    #[min = 1]
    num_dice: Option<i64>,
    #[description = "A modifier to add to the total roll (default is 0)"] modifier: Option<i64>,
) -> Result<()> {
    let request = build_request(
        num_dice.unwrap_or(1),
        sides,
        modifier.unwrap_or(0),
        ctx.data().max_dice(),
    )?;

    let result = request.roll_detailed(&mut rand::rng());
    info!(
        "{} rolled {}d{}{:+}: total {}",
        ctx.author().tag(),
        request.dice_count(),
        request.sides(),
        request.modifier(),
        result.total
    );

    ctx.say(format_roll(&result)).await?;
    Ok(())
}

/// Get available dice commands.
#[must_use]
pub fn dice_commands() -> Vec<poise::Command<Data, BotError>> {
    vec![roll()]
}
