use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

use crate::constants::{AUTHORITY_SEED, CONFIG_SEED};
use crate::events::VaultFunded;
use crate::state::StakeConfig;

#[derive(Accounts)]
pub struct Fund<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = reward_mint
    )]
    pub config: Account<'info, StakeConfig>,

    pub reward_mint: Account<'info, Mint>,

    /// CHECK: PDA that signs vault-originated transfers; carries no data
    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.vault_auth_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = reward_mint,
        associated_token::authority = funder
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = reward_mint,
        associated_token::authority = vault_authority
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn fund_handler(ctx: Context<Fund>, amount: u64) -> Result<()> {
    transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.reward_vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(VaultFunded {
        funder: ctx.accounts.funder.key(),
        amount,
    });

    Ok(())
}
