use anchor_lang::prelude::*;

#[account]
#[derive(Default, InitSpace)]
pub struct StakeConfig {
    pub reward_mint: Pubkey,      // Mint of the reward token paid out of the vault
    pub reward_rate_per_day: u64, // Reward base units per staked item per day
    pub vault_auth_bump: u8,      // Bump of the vault authority PDA
    pub bump: u8,                 // Bump of this config PDA
}
