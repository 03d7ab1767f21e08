use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, LEDGER_SEED};
use crate::error::StakeError;
use crate::events::RewardsClaimed;
use crate::state::{StakeConfig, StakeLedger};
use crate::utils::{accrued_reward, verify_evidence, CustodyStatus};

#[derive(Accounts)]
pub struct Claim<'info> {
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

    pub reward_mint: Box<Account<'info, Mint>>,

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
    pub system_program: Program<'info, System>,
}

/// Settles accrued rewards for every staked item without releasing
/// custody. The remaining accounts are the evidence: one holding account
/// per ledger entry, in ledger order.
pub fn claim_handler<'a, 'b, 'c: 'info, 'info>(
    ctx: Context<'a, 'b, 'c, 'info, Claim<'info>>,
) -> Result<()> {
    require!(
        ctx.remaining_accounts.len() == ctx.accounts.ledger.len(),
        StakeError::EvidenceCountMismatch
    );

    let now = Clock::get()?.unix_timestamp;
    let rate = ctx.accounts.config.reward_rate_per_day;
    let owner = ctx.accounts.ledger.owner;

    let mut total_reward: u64 = 0;
    let mut settled: u64 = 0;
    let mut lost: Vec<Pubkey> = Vec::new();

    for (index, evidence) in ctx.remaining_accounts.iter().enumerate() {
        let entry = ctx.accounts.ledger.entries[index];

        let holding = Account::<TokenAccount>::try_from(evidence)
            .map_err(|_| StakeError::EvidenceMismatch)?;

        match verify_evidence(
            &owner,
            &entry.mint,
            evidence.key,
            &holding.owner,
            &holding.mint,
            holding.amount,
        )? {
            CustodyStatus::Lost => lost.push(entry.mint),
            CustodyStatus::Held => {
                let reward = accrued_reward(entry.staked_at, now, rate)?;
                total_reward = total_reward
                    .checked_add(reward)
                    .ok_or(StakeError::ArithmeticOverflow)?;
                ctx.accounts.ledger.reset_accrual(index, now);
                settled += 1;
            }
        }
    }

    require!(
        ctx.accounts.reward_vault.amount >= total_reward,
        StakeError::InsufficientRewardBalance
    );

    if total_reward > 0 {
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
            total_reward,
        )?;
    }

    let pruned = ctx.accounts.ledger.prune(&lost)? as u64;
    if pruned > 0 {
        let new_size = StakeLedger::size_for(ctx.accounts.ledger.len());
        ctx.accounts.ledger.to_account_info().realloc(new_size, false)?;
    }

    emit!(RewardsClaimed {
        owner,
        total_reward,
        settled,
        pruned,
    });

    Ok(())
}
