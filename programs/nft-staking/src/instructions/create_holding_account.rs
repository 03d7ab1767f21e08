use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

/// Provisions the canonical holding account for `(owner, mint)`. The
/// account creation itself is delegated to the associated token program.
#[derive(Accounts)]
pub struct CreateHoldingAccount<'info> {
    #[account(
        init,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = owner
    )]
    pub holding_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn create_holding_account_handler(_ctx: Context<CreateHoldingAccount>) -> Result<()> {
    Ok(())
}
