use anchor_lang::prelude::*;

use crate::errors::*;
use crate::state::{MAX_ROLL_UNDER, MIN_ROLL_UNDER};

/// Validate the win threshold is a non-degenerate probability
pub fn validate_roll_threshold(roll_under: u8) -> Result<()> {
    require!(
        roll_under >= MIN_ROLL_UNDER && roll_under <= MAX_ROLL_UNDER,
        DiceError::InvalidRollThreshold
    );
    Ok(())
}

/// Validate the stake is strictly positive
pub fn validate_bet_amount(amount: u64) -> Result<()> {
    require!(amount > 0, DiceError::InvalidBetAmount);
    Ok(())
}

/// Payout owed to a winning bet.
///
/// `amount * (100 / roll_under) * (1 - edge)` in integer form:
/// `amount * (10_000 - house_edge_bps) / (100 * roll_under)`, rounded down.
pub fn payout_for(amount: u64, roll_under: u8, house_edge_bps: u16) -> Result<u64> {
    let retained = 10_000u128
        .checked_sub(house_edge_bps as u128)
        .ok_or_else(|| error!(DiceError::ArithmeticUnderflow))?;

    let gross = (amount as u128)
        .checked_mul(retained)
        .ok_or_else(|| error!(DiceError::ArithmeticOverflow))?;

    let divisor = (roll_under as u128)
        .checked_mul(100)
        .ok_or_else(|| error!(DiceError::ArithmeticOverflow))?;

    let payout = gross
        .checked_div(divisor)
        .ok_or_else(|| error!(DiceError::ArithmeticOverflow))?;

    u64::try_from(payout).map_err(|_| error!(DiceError::ArithmeticOverflow))
}

/// Checked arithmetic operations
pub trait CheckedMath {
    fn safe_add(&self, other: Self) -> Result<Self>
    where
        Self: Sized;
    fn safe_sub(&self, other: Self) -> Result<Self>
    where
        Self: Sized;
}

impl CheckedMath for u64 {
    fn safe_add(&self, other: Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or_else(|| error!(DiceError::ArithmeticOverflow))
    }

    fn safe_sub(&self, other: Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or_else(|| error!(DiceError::ArithmeticUnderflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HOUSE_EDGE_BPS;

    #[test]
    fn payout_matches_harness_bet() {
        // 0.01 SOL under 96: 10_000_000 * 9_850 / 9_600
        assert_eq!(payout_for(10_000_000, 96, HOUSE_EDGE_BPS).unwrap(), 10_260_416);
    }

    #[test]
    fn payout_even_odds() {
        // roll_under 50 pays slightly under 2x
        assert_eq!(payout_for(1_000, 50, HOUSE_EDGE_BPS).unwrap(), 1_970);
    }

    #[test]
    fn payout_longshot_exceeds_stake() {
        let payout = payout_for(1_000_000, 1, HOUSE_EDGE_BPS).unwrap();
        assert_eq!(payout, 98_500_000);
    }

    #[test]
    fn payout_high_threshold_below_stake() {
        // 99-under wins almost always, so the payout dips under the stake
        assert!(payout_for(1_000_000, 99, HOUSE_EDGE_BPS).unwrap() < 1_000_000);
    }

    #[test]
    fn payout_zero_edge_is_fair() {
        assert_eq!(payout_for(1_000, 50, 0).unwrap(), 2_000);
    }

    #[test]
    fn threshold_bounds() {
        assert!(validate_roll_threshold(0).is_err());
        assert!(validate_roll_threshold(100).is_err());
        assert!(validate_roll_threshold(u8::MAX).is_err());
        assert!(validate_roll_threshold(1).is_ok());
        assert!(validate_roll_threshold(99).is_ok());
    }

    #[test]
    fn stake_must_be_positive() {
        assert!(validate_bet_amount(0).is_err());
        assert!(validate_bet_amount(1).is_ok());
    }

    #[test]
    fn checked_math_maps_to_labeled_errors() {
        assert_eq!(2u64.safe_add(3).unwrap(), 5);
        assert_eq!(3u64.safe_sub(2).unwrap(), 1);
        assert!(u64::MAX.safe_add(1).is_err());
        assert!(0u64.safe_sub(1).is_err());
    }
}
