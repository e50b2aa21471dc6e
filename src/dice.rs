//! Dice rolling core and the `/roll` command.

mod commands;
mod roller;

pub use commands::{dice_commands, format_roll};
pub use roller::{
    RollRequest, RollResult, roll_detailed, roll_detailed_with_rng, roll_total,
    roll_total_with_rng,
};
