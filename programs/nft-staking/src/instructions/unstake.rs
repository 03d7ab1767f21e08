use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        mpl_token_metadata::instructions::{
            ThawDelegatedAccountCpi, ThawDelegatedAccountCpiAccounts,
        },
        MasterEditionAccount, Metadata,
    },
    token::{revoke, transfer, Mint, Revoke, Token, TokenAccount, Transfer},
};

use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, LEDGER_SEED};
use crate::error::StakeError;
use crate::events::ItemUnstaked;
use crate::state::{StakeConfig, StakeLedger};
use crate::utils::accrued_reward;

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = reward_mint
    )]
    pub config: Box<Account<'info, StakeConfig>>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, user.key().as_ref()],
        bump,
        constraint = ledger.owner == user.key() @ StakeError::Unauthorized
    )]
    pub ledger: Account<'info, StakeLedger>,

    pub mint: Box<Account<'info, Mint>>,

    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = user
    )]
    pub holding_account: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            mint.key().as_ref(),
            b"edition",
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub edition: Box<Account<'info, MasterEditionAccount>>,

    /// CHECK: PDA that signs vault-originated transfers; carries no data
    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.vault_auth_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = reward_mint,
        associated_token::authority = vault_authority
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = reward_mint,
        associated_token::authority = user
    )]
    pub reward_receive_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

pub fn unstake_handler(ctx: Context<Unstake>) -> Result<()> {
    let mint_key = ctx.accounts.mint.key();
    let index = ctx.accounts.ledger.position_of(&mint_key)?;
    let entry = ctx.accounts.ledger.entries[index];

    let now = Clock::get()?.unix_timestamp;
    let reward = accrued_reward(entry.staked_at, now, ctx.accounts.config.reward_rate_per_day)?;

    // The payout settles before custody is released, so an underfunded
    // vault cannot hand back the item with the reward unpaid.
    require!(
        ctx.accounts.reward_vault.amount >= reward,
        StakeError::InsufficientRewardBalance
    );

    if reward > 0 {
        transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.reward_vault.to_account_info(),
                    to: ctx.accounts.reward_receive_account.to_account_info(),
                    authority: ctx.accounts.vault_authority.to_account_info(),
                },
                &[&[AUTHORITY_SEED, &[ctx.accounts.config.vault_auth_bump]]],
            ),
            reward,
        )?;
    }

    // Thaw the holding account and hand authority back to the user.
    let delegate = ctx.accounts.vault_authority.to_account_info();
    let token_account = ctx.accounts.holding_account.to_account_info();
    let edition = ctx.accounts.edition.to_account_info();
    let mint = ctx.accounts.mint.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();
    let metadata_program = ctx.accounts.metadata_program.to_account_info();

    ThawDelegatedAccountCpi::new(
        &metadata_program,
        ThawDelegatedAccountCpiAccounts {
            delegate: &delegate,
            token_account: &token_account,
            edition: &edition,
            mint: &mint,
            token_program: &token_program,
        },
    )
    .invoke_signed(&[&[AUTHORITY_SEED, &[ctx.accounts.config.vault_auth_bump]]])?;

    revoke(CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Revoke {
            source: ctx.accounts.holding_account.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        },
    ))?;

    ctx.accounts.ledger.remove(index);

    let new_size = StakeLedger::size_for(ctx.accounts.ledger.len());
    ctx.accounts.ledger.to_account_info().realloc(new_size, false)?;

    emit!(ItemUnstaked {
        owner: ctx.accounts.user.key(),
        mint: mint_key,
        reward,
    });

    Ok(())
}
