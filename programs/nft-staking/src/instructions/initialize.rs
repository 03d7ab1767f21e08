use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::constants::{AUTHORITY_SEED, CONFIG_SEED};
use crate::state::StakeConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        seeds = [CONFIG_SEED],
        bump,
        space = 8 + StakeConfig::INIT_SPACE
    )]
    pub config: Account<'info, StakeConfig>,

    pub reward_mint: Account<'info, Mint>,

    /// CHECK: PDA that signs vault-originated transfers; carries no data
    #[account(
        seeds = [AUTHORITY_SEED],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = reward_mint,
        associated_token::authority = vault_authority
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>, reward_rate_per_day: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.reward_mint = ctx.accounts.reward_mint.key();
    config.reward_rate_per_day = reward_rate_per_day;
    config.vault_auth_bump = ctx.bumps.vault_authority;
    config.bump = ctx.bumps.config;

    Ok(())
}
