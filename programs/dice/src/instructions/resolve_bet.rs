use anchor_lang::prelude::*;
use anchor_lang::solana_program::ed25519_program;
use anchor_lang::solana_program::sysvar::instructions::load_instruction_at_checked;
use anchor_lang::system_program;

use crate::ed25519::parse_single_entry;
use crate::errors::*;
use crate::state::*;
use crate::validation::payout_for;

#[derive(Accounts)]
pub struct ResolveBet<'info> {
    #[account(mut)]
    pub house: Signer<'info>,

    /// CHECK: constrained by `bet.has_one = player`; receives lamports only
    #[account(mut)]
    pub player: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, house.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    #[account(
        mut,
        has_one = player,
        has_one = house,
        has_one = vault,
        close = player,
        seeds = [BET_SEED, vault.key().as_ref(), bet.seed.to_le_bytes().as_ref()],
        bump = bet.bump
    )]
    pub bet: Account<'info, Bet>,

    /// CHECK: address constraint guarantees this is the instructions sysvar
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ResolveBet>, sig: Vec<u8>) -> Result<()> {
    verify_house_signature(&ctx, &sig)?;

    let roll = roll_from_signature(&sig);
    msg!("Rolled {} against threshold {}", roll, ctx.accounts.bet.roll_under);

    // The boundary is inclusive on the losing side: roll == roll_under loses
    if roll < ctx.accounts.bet.roll_under {
        let payout = payout_for(
            ctx.accounts.bet.amount,
            ctx.accounts.bet.roll_under,
            HOUSE_EDGE_BPS,
        )?;

        let house_key = ctx.accounts.house.key();
        let seeds = &[VAULT_SEED, house_key.as_ref(), &[ctx.bumps.vault]];
        let signer_seeds = &[&seeds[..]];

        system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.player.to_account_info(),
                },
                signer_seeds,
            ),
            payout,
        )?;

        msg!("Win: paid {} lamports to {}", payout, ctx.accounts.bet.player);
    } else {
        msg!("Loss: stake stays with the vault");
    }

    // `close = player` tears the record down in the same transaction,
    // both branches; its absence is the durable settled signal

    Ok(())
}

/// Check the Ed25519 verify instruction at index 0 proves the house signed
/// this bet's commitment. Fails closed: any mismatch leaves the bet open.
fn verify_house_signature(ctx: &Context<ResolveBet>, sig: &[u8]) -> Result<()> {
    require!(
        sig.len() == ED25519_SIGNATURE_LEN,
        DiceError::Ed25519Signature
    );

    let ix = load_instruction_at_checked(0, &ctx.accounts.instructions_sysvar.to_account_info())
        .map_err(|_| error!(DiceError::Ed25519Program))?;
    require_keys_eq!(ix.program_id, ed25519_program::ID, DiceError::Ed25519Program);

    let entry = parse_single_entry(&ix.data)?;

    // The precompile verified the triple; pin each part to this bet.
    // `has_one = house` already ties the signer account to the record.
    let signer_key =
        Pubkey::try_from(entry.public_key).map_err(|_| error!(DiceError::Ed25519Pubkey))?;
    require_keys_eq!(signer_key, ctx.accounts.house.key(), DiceError::Ed25519Pubkey);

    require!(entry.signature == sig, DiceError::Ed25519Signature);

    // Commitment = the persisted record minus its discriminator prefix
    let bet_info = ctx.accounts.bet.to_account_info();
    let data = bet_info.try_borrow_data()?;
    require!(entry.message == &data[8..], DiceError::Ed25519Message);

    Ok(())
}

/// Reduce the signature bytes to a roll in [0, 100).
///
/// blake3 over the 64 signature bytes, split into two little-endian u128
/// halves, summing their residues mod 100. Bias from the modulo over a
/// 256-bit source is below 2^-120. Changing this mapping is a consensus
/// break for live deployments.
pub fn roll_from_signature(sig: &[u8]) -> u8 {
    let hash = blake3::hash(sig);
    let bytes = hash.as_bytes();

    let mut half = [0u8; 16];
    half.copy_from_slice(&bytes[0..16]);
    let lower = u128::from_le_bytes(half);
    half.copy_from_slice(&bytes[16..32]);
    let upper = u128::from_le_bytes(half);

    ((lower % 100 + upper % 100) % 100) as u8
}
