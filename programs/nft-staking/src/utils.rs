use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::SECONDS_PER_DAY;
use crate::error::{StakeError, StakeResult};

/// Outcome of checking one piece of claim evidence against the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustodyStatus {
    /// The holding account still holds the item; reward is due.
    Held,
    /// Correctly addressed evidence, but the item left the holding
    /// account outside program control. The entry is stale.
    Lost,
}

/// The canonical holding account for `(owner, mint)`.
pub fn holding_account_for(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Reward accrued by one item between `staked_at` and `now`, floored to
/// whole base units.
pub fn accrued_reward(staked_at: i64, now: i64, rate_per_day: u64) -> StakeResult<u64> {
    let elapsed = now
        .checked_sub(staked_at)
        .ok_or(StakeError::ArithmeticOverflow)?;
    let elapsed = u64::try_from(elapsed).map_err(|_| StakeError::ArithmeticOverflow)?;

    elapsed
        .checked_mul(rate_per_day)
        .ok_or(StakeError::ArithmeticOverflow)?
        .checked_div(SECONDS_PER_DAY as u64)
        .ok_or(StakeError::ArithmeticOverflow)
}

/// Validates one evidence account against the identity the ledger can
/// derive for it. A wrong address, owner or mint cannot be explained by
/// external state change and fails the whole claim; a zero balance at
/// the correct address marks the entry stale instead.
pub fn verify_evidence(
    ledger_owner: &Pubkey,
    staked_mint: &Pubkey,
    evidence_key: &Pubkey,
    recorded_owner: &Pubkey,
    recorded_mint: &Pubkey,
    balance: u64,
) -> StakeResult<CustodyStatus> {
    let expected = holding_account_for(ledger_owner, staked_mint);
    if *evidence_key != expected || recorded_owner != ledger_owner || recorded_mint != staked_mint {
        return Err(StakeError::EvidenceMismatch);
    }

    if balance == 0 {
        return Ok(CustodyStatus::Lost);
    }

    Ok(CustodyStatus::Held)
}
