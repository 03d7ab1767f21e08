use anchor_lang::prelude::*;

use crate::error::{StakeError, StakeResult};

/// One staked item and the timestamp its unclaimed reward accrues from.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct StakeEntry {
    pub mint: Pubkey,
    pub staked_at: i64,
}

/// Per-user record of currently staked items. The mint and its accrual
/// timestamp travel together in one entry, so the two views can never
/// drift out of length-sync.
#[account]
#[derive(Default)]
pub struct StakeLedger {
    pub owner: Pubkey,
    pub entries: Vec<StakeEntry>,
}

impl StakeLedger {
    pub const ENTRY_SIZE: usize = 32 + 8;

    /// Account size for a ledger holding `n` entries.
    pub fn size_for(n: usize) -> usize {
        8 + 32 + 4 + n * Self::ENTRY_SIZE
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insertion guard. The caller predicts the append position before
    /// the transaction runs; the prediction must match the length
    /// observed at execution time. A smaller index indicates a stale
    /// client view or an overlapping insertion.
    pub fn check_append_index(&self, predicted_index: u64) -> StakeResult<()> {
        if predicted_index != self.entries.len() as u64 {
            return Err(StakeError::IndexMismatch);
        }
        Ok(())
    }

    pub fn check_not_staked(&self, mint: &Pubkey) -> StakeResult<()> {
        if self.entries.iter().any(|e| e.mint == *mint) {
            return Err(StakeError::AlreadyStaked);
        }
        Ok(())
    }

    pub fn append(&mut self, mint: Pubkey, staked_at: i64) {
        self.entries.push(StakeEntry { mint, staked_at });
    }

    /// Index of a staked mint. Linear scan; per-user item counts stay
    /// small.
    pub fn position_of(&self, mint: &Pubkey) -> StakeResult<usize> {
        self.entries
            .iter()
            .position(|e| e.mint == *mint)
            .ok_or(StakeError::NotStaked)
    }

    /// Removes one entry. Relative order of the remaining entries is not
    /// part of the contract, so swap-remove keeps this O(1).
    pub fn remove(&mut self, index: usize) -> StakeEntry {
        self.entries.swap_remove(index)
    }

    /// Restarts reward accrual for the entry at `index`.
    pub fn reset_accrual(&mut self, index: usize, now: i64) {
        self.entries[index].staked_at = now;
    }

    /// Drops every entry whose mint is listed, returning how many were
    /// removed.
    pub fn prune(&mut self, mints: &[Pubkey]) -> StakeResult<usize> {
        for mint in mints {
            let index = self.position_of(mint)?;
            self.entries.swap_remove(index);
        }
        Ok(mints.len())
    }
}
