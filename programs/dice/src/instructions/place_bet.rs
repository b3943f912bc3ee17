use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::*;
use crate::state::*;
use crate::validation::{payout_for, validate_bet_amount, validate_roll_threshold, CheckedMath};

#[derive(Accounts)]
#[instruction(seed: u128)]
pub struct PlaceBet<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    /// CHECK: identity only; the vault derivation binds the bet to this house
    pub house: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, house.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    /// Fails with an already-in-use error when the (vault, seed) pair was
    /// used before; the caller retries with a fresh seed
    #[account(
        init,
        payer = player,
        space = Bet::LEN,
        seeds = [BET_SEED, vault.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump
    )]
    pub bet: Account<'info, Bet>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PlaceBet>, seed: u128, roll_under: u8, amount: u64) -> Result<()> {
    validate_roll_threshold(roll_under)?;
    validate_bet_amount(amount)?;

    // Solvency: the vault must cover the worst case for this bet beyond the
    // incoming stake, without ever dipping under its rent floor
    let payout = payout_for(amount, roll_under, HOUSE_EDGE_BPS)?;
    let net_liability = payout.saturating_sub(amount);
    let required = Rent::get()?.minimum_balance(0).safe_add(net_liability)?;
    require!(
        ctx.accounts.vault.lamports() >= required,
        DiceError::VaultUnderfunded
    );

    // Escrow the stake: player -> vault
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let bet = &mut ctx.accounts.bet;
    bet.seed = seed;
    bet.player = ctx.accounts.player.key();
    bet.house = ctx.accounts.house.key();
    bet.vault = ctx.accounts.vault.key();
    bet.amount = amount;
    bet.roll_under = roll_under;
    bet.slot = Clock::get()?.slot;
    bet.bump = ctx.bumps.bet;

    msg!(
        "Bet placed: {} lamports under {} by player {}",
        amount,
        roll_under,
        bet.player
    );

    Ok(())
}
