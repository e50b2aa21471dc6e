//! Dice rolling with an injectable random source.

use rand::{Rng, RngExt};

use crate::error::{BotError, Result};

/// A validated request to roll `dice_count` dice with `sides` faces each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    dice_count: u32,
    sides: u32,
    modifier: i64,
}

impl RollRequest {
    /// Create a roll request, rejecting zero dice or zero-sided dice.
    pub fn new(dice_count: u32, sides: u32, modifier: i64) -> Result<Self> {
        if dice_count < 1 || sides < 1 {
            return Err(BotError::InvalidDice {
                dice_count: i64::from(dice_count),
                sides: i64::from(sides),
            });
        }

        Ok(Self {
            dice_count,
            sides,
            modifier,
        })
    }

    pub fn dice_count(&self) -> u32 {
        self.dice_count
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// Roll every die and return only the modified total.
    pub fn roll_total(&self, rng: &mut impl Rng) -> i64 {
        let sum: i64 = (0..self.dice_count)
            .map(|_| i64::from(rng.random_range(1..=self.sides)))
            .sum();
        sum.saturating_add(self.modifier)
    }

    /// Roll every die and keep the individual values alongside the total.
    pub fn roll_detailed(&self, rng: &mut impl Rng) -> RollResult {
        let rolls: Vec<u32> = (0..self.dice_count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();
        let sum: i64 = rolls.iter().copied().map(i64::from).sum();

        RollResult {
            rolls,
            modifier: self.modifier,
            total: sum.saturating_add(self.modifier),
        }
    }
}

/// Outcome of a detailed roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    /// Individual die values in roll order
    pub rolls: Vec<u32>,
    pub modifier: i64,
    /// Sum of `rolls` plus `modifier`
    pub total: i64,
}

/// Roll dice using the thread-local generator and return the total.
pub fn roll_total(dice_count: u32, sides: u32, modifier: i64) -> Result<i64> {
    roll_total_with_rng(dice_count, sides, modifier, &mut rand::rng())
}

/// Roll dice from the given random source and return the total.
pub fn roll_total_with_rng(
    dice_count: u32,
    sides: u32,
    modifier: i64,
    rng: &mut impl Rng,
) -> Result<i64> {
    Ok(RollRequest::new(dice_count, sides, modifier)?.roll_total(rng))
}

/// Roll dice using the thread-local generator and return the full breakdown.
pub fn roll_detailed(dice_count: u32, sides: u32, modifier: i64) -> Result<RollResult> {
    roll_detailed_with_rng(dice_count, sides, modifier, &mut rand::rng())
}

/// Roll dice from the given random source and return the full breakdown.
pub fn roll_detailed_with_rng(
    dice_count: u32,
    sides: u32,
    modifier: i64,
    rng: &mut impl Rng,
) -> Result<RollResult> {
    Ok(RollRequest::new(dice_count, sides, modifier)?.roll_detailed(rng))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn detailed_roll_total_matches_breakdown() {
        let mut rng = StdRng::seed_from_u64(42);

        for (dice_count, sides, modifier) in [(1, 20, 0), (3, 6, 2), (10, 100, -7), (4, 1, 5)] {
            let result = roll_detailed_with_rng(dice_count, sides, modifier, &mut rng)
                .expect("valid roll");

            assert_eq!(result.rolls.len(), dice_count as usize);
            assert!(result.rolls.iter().all(|r| (1..=sides).contains(r)));
            assert_eq!(result.modifier, modifier);

            let sum: i64 = result.rolls.iter().map(|&r| i64::from(r)).sum();
            assert_eq!(result.total, sum + modifier);
        }
    }

    #[test]
    fn total_stays_within_bounds() {
        for _ in 0..100 {
            let total = roll_total(2, 6, 3).expect("valid roll");
            assert!((5..=15).contains(&total), "total {total} out of range");
        }
    }

    #[test]
    fn single_sided_dice_are_deterministic() {
        let result = roll_detailed(5, 1, -2).expect("valid roll");
        assert_eq!(result.rolls, vec![1; 5]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn same_seed_gives_same_rolls() {
        let first = roll_detailed_with_rng(6, 20, 1, &mut StdRng::seed_from_u64(7));
        let second = roll_detailed_with_rng(6, 20, 1, &mut StdRng::seed_from_u64(7));
        assert_eq!(first.ok(), second.ok());
    }

    #[test]
    fn total_and_detailed_draw_the_same_sequence() {
        let total = roll_total_with_rng(8, 12, 4, &mut StdRng::seed_from_u64(99)).ok();
        let detailed = roll_detailed_with_rng(8, 12, 4, &mut StdRng::seed_from_u64(99))
            .ok()
            .map(|result| result.total);
        assert_eq!(total, detailed);
    }

    #[test]
    fn zero_dice_or_sides_are_rejected() {
        assert!(matches!(
            roll_total(0, 6, 0),
            Err(BotError::InvalidDice {
                dice_count: 0,
                sides: 6
            })
        ));
        assert!(matches!(
            roll_total(2, 0, 0),
            Err(BotError::InvalidDice { .. })
        ));
        assert!(matches!(
            roll_detailed(0, 0, 1),
            Err(BotError::InvalidDice { .. })
        ));
        assert!(matches!(
            roll_detailed(1, 0, 0),
            Err(BotError::InvalidDice { .. })
        ));
    }

    #[test]
    fn extreme_modifier_saturates() {
        let result = roll_detailed(1, 6, i64::MAX).expect("valid roll");
        assert_eq!(result.total, i64::MAX);
    }
}
