use anchor_lang::prelude::*;

declare_id!("CpBBeweFoa12rHVeX3xND5a5pVuDE3reUgqx5CMBbRN1");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

#[program]
pub mod nft_staking {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, reward_rate_per_day: u64) -> Result<()> {
        instructions::initialize_handler(ctx, reward_rate_per_day)
    }

    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        instructions::fund_handler(ctx, amount)
    }

    pub fn create_holding_account(ctx: Context<CreateHoldingAccount>) -> Result<()> {
        instructions::create_holding_account_handler(ctx)
    }

    pub fn stake(ctx: Context<Stake>, predicted_index: u64) -> Result<()> {
        instructions::stake_handler(ctx, predicted_index)
    }

    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        instructions::unstake_handler(ctx)
    }

    pub fn claim<'a, 'b, 'c: 'info, 'info>(
        ctx: Context<'a, 'b, 'c, 'info, Claim<'info>>,
    ) -> Result<()> {
        instructions::claim_handler(ctx)
    }
}
