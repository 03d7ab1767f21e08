use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{
        mpl_token_metadata::instructions::{
            FreezeDelegatedAccountCpi, FreezeDelegatedAccountCpiAccounts,
        },
        MasterEditionAccount, Metadata,
    },
    token::{approve, Approve, Mint, Token, TokenAccount},
};

use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, LEDGER_SEED};
use crate::error::StakeError;
use crate::events::ItemStaked;
use crate::state::{StakeConfig, StakeLedger};

#[derive(Accounts)]
#[instruction(predicted_index: u64)]
pub struct Stake<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Box<Account<'info, StakeConfig>>,

    #[account(
        init_if_needed,
        payer = user,
        seeds = [LEDGER_SEED, user.key().as_ref()],
        bump,
        space = StakeLedger::size_for(predicted_index as usize + 1)
    )]
    pub ledger: Account<'info, StakeLedger>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = user,
        constraint = holding_account.amount == 1 @ StakeError::TokenAccountEmpty
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

    /// CHECK: PDA delegate that takes custody of staked items; carries no data
    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.vault_auth_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

pub fn stake_handler(ctx: Context<Stake>, predicted_index: u64) -> Result<()> {
    let user_key = ctx.accounts.user.key();
    let mint_key = ctx.accounts.mint.key();

    {
        let ledger = &mut ctx.accounts.ledger;
        if ledger.owner == Pubkey::default() {
            ledger.owner = user_key;
        } else if ledger.owner != user_key {
            return Err(StakeError::Unauthorized.into());
        }

        // Re-validated against the length at execution time, not the
        // client's snapshot: within one transaction each stake observes
        // the appends of the stakes before it.
        ledger.check_append_index(predicted_index)?;
        ledger.check_not_staked(&mint_key)?;
    }

    // Custody: delegate the holding account to the program authority and
    // freeze it in place.
    approve(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Approve {
                to: ctx.accounts.holding_account.to_account_info(),
                delegate: ctx.accounts.vault_authority.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        1,
    )?;

    let delegate = ctx.accounts.vault_authority.to_account_info();
    let token_account = ctx.accounts.holding_account.to_account_info();
    let edition = ctx.accounts.edition.to_account_info();
    let mint = ctx.accounts.mint.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();
    let metadata_program = ctx.accounts.metadata_program.to_account_info();

    FreezeDelegatedAccountCpi::new(
        &metadata_program,
        FreezeDelegatedAccountCpiAccounts {
            delegate: &delegate,
            token_account: &token_account,
            edition: &edition,
            mint: &mint,
            token_program: &token_program,
        },
    )
    .invoke_signed(&[&[AUTHORITY_SEED, &[ctx.accounts.config.vault_auth_bump]]])?;

    // Grow the ledger account before appending, topping up rent from the
    // user where the new size requires it.
    let new_size = StakeLedger::size_for(ctx.accounts.ledger.len() + 1);
    let ledger_info = ctx.accounts.ledger.to_account_info();
    let required_lamports = Rent::get()?.minimum_balance(new_size);
    if ledger_info.lamports() < required_lamports {
        let top_up = required_lamports - ledger_info.lamports();
        anchor_lang::solana_program::program::invoke(
            &anchor_lang::solana_program::system_instruction::transfer(
                &user_key,
                ledger_info.key,
                top_up,
            ),
            &[
                ctx.accounts.user.to_account_info(),
                ledger_info.clone(),
                ctx.accounts.system_program.to_account_info(),
            ],
        )?;
    }
    ledger_info.realloc(new_size, false)?;

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.ledger.append(mint_key, now);

    emit!(ItemStaked {
        owner: user_key,
        mint: mint_key,
        staked_at: now,
        ledger_len: ctx.accounts.ledger.len() as u64,
    });

    Ok(())
}
