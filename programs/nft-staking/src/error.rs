use anchor_lang::prelude::*;

/// Result of the pure core operations, before conversion into an Anchor
/// error at the instruction boundary.
pub type StakeResult<T> = core::result::Result<T, StakeError>;

#[error_code]
pub enum StakeError {
    #[msg("Signer does not match the ledger owner.")]
    Unauthorized,
    #[msg("Predicted insertion index does not match the current ledger length.")]
    IndexMismatch,
    #[msg("Item is already staked.")]
    AlreadyStaked,
    #[msg("Item is not staked.")]
    NotStaked,
    #[msg("Holding account does not hold the item.")]
    TokenAccountEmpty,
    #[msg("Evidence count does not match the ledger length.")]
    EvidenceCountMismatch,
    #[msg("Evidence does not match the derivable holding account.")]
    EvidenceMismatch,
    #[msg("Reward vault cannot cover the payout.")]
    InsufficientRewardBalance,
    #[msg("Arithmetic overflow.")]
    ArithmeticOverflow,
}
