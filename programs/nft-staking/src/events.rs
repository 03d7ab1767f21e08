use anchor_lang::prelude::*;

#[event]
pub struct VaultFunded {
    pub funder: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ItemStaked {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub staked_at: i64,
    pub ledger_len: u64,
}

#[event]
pub struct ItemUnstaked {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub reward: u64,
}

#[event]
pub struct RewardsClaimed {
    pub owner: Pubkey,
    pub total_reward: u64,
    pub settled: u64,
    pub pruned: u64,
}
