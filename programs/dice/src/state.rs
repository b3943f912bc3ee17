use anchor_lang::prelude::*;

/// Open wager - created on placement, closed on resolution.
/// Its existence is the only evidence a wager is pending.
#[account]
pub struct Bet {
    /// Caller-supplied random seed; unique per vault
    pub seed: u128,
    /// Player who staked the wager
    pub player: Pubkey,
    /// House whose vault backs the wager
    pub house: Pubkey,
    /// Vault PDA the stake was escrowed into (cross-checked on resolution)
    pub vault: Pubkey,
    /// Stake in lamports
    pub amount: u64,
    /// Win threshold: the roll must land strictly below this
    pub roll_under: u8,
    /// Slot the bet was placed in
    pub slot: u64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl Bet {
    pub const LEN: usize = 8 + // discriminator
        16 + // seed
        32 + // player
        32 + // house
        32 + // vault
        8 + // amount
        1 + // roll_under
        8 + // slot
        1; // bump

    /// Width of the commitment the house signs: the account data minus
    /// the discriminator prefix.
    pub const COMMITMENT_LEN: usize = Self::LEN - 8;
}

// Constants with rationale

/// Vault PDA seed tag
pub const VAULT_SEED: &[u8] = b"vault";

/// Bet PDA seed tag
pub const BET_SEED: &[u8] = b"bet";

/// House edge in basis points (1.5%)
/// Rationale: keeps expected value on the house side of the fair
/// (100 / roll_under) multiplier. Changing this reprices every payout.
pub const HOUSE_EDGE_BPS: u16 = 150;

/// Lower and upper bounds on the win threshold.
/// Rationale: 0 is a certain loss and 100 a certain win; both are
/// degenerate wagers and rejected outright.
pub const MIN_ROLL_UNDER: u8 = 1;
pub const MAX_ROLL_UNDER: u8 = 99;

/// Expected Ed25519 signature width in bytes
pub const ED25519_SIGNATURE_LEN: usize = 64;
