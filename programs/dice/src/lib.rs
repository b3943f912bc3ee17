use anchor_lang::prelude::*;

declare_id!("Ax23xVjcap9m55GU9qKiMT1xahUAzLHNaFHmE8486BoR");

pub mod ed25519;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod validation;

use instructions::*;

#[program]
pub mod dice {
    use super::*;

    /// Fund the house vault (PDA derived from the house pubkey)
    pub fn initialize(ctx: Context<Initialize>, amount: u64) -> Result<()> {
        instructions::initialize::handler(ctx, amount)
    }

    /// Place a wager: create the bet record and escrow the stake in the vault
    pub fn place_bet(
        ctx: Context<PlaceBet>,
        seed: u128,
        roll_under: u8,
        amount: u64,
    ) -> Result<()> {
        instructions::place_bet::handler(ctx, seed, roll_under, amount)
    }

    /// Settle a wager against the house signature over the bet commitment
    pub fn resolve_bet(ctx: Context<ResolveBet>, sig: Vec<u8>) -> Result<()> {
        instructions::resolve_bet::handler(ctx, sig)
    }
}
