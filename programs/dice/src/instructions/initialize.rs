use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::*;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub house: Signer<'info>,

    /// Vault PDA - data-less system account holding the house's liquidity
    #[account(
        mut,
        seeds = [VAULT_SEED, house.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, amount: u64) -> Result<()> {
    require!(amount > 0, DiceError::InvalidFundingAmount);

    // Transfer SOL from house to vault PDA; the runtime rejects the
    // transfer if the house cannot cover it
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.house.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!(
        "Vault funded with {} lamports by house {}",
        amount,
        ctx.accounts.house.key()
    );

    Ok(())
}
