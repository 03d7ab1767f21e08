use anchor_lang::prelude::Pubkey;
use anchor_spl::associated_token::get_associated_token_address;
use nft_staking::error::StakeError;
use nft_staking::utils::{holding_account_for, verify_evidence, CustodyStatus};

fn pk(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; 32])
}

// =====================================================
// HOLDING-ACCOUNT DERIVATION
// =====================================================

#[test]
fn ut_holding_account_matches_spl_derivation() {
    let owner = pk(1);
    let mint = pk(2);

    assert_eq!(
        holding_account_for(&owner, &mint),
        get_associated_token_address(&owner, &mint)
    );
}

// =====================================================
// EVIDENCE VERIFICATION
// =====================================================

#[test]
fn ut_custody_held_settles() {
    let owner = pk(1);
    let mint = pk(2);
    let key = holding_account_for(&owner, &mint);

    let result = verify_evidence(&owner, &mint, &key, &owner, &mint, 1);

    assert!(matches!(result, Ok(CustodyStatus::Held)));
}

#[test]
fn ut_zero_balance_marks_entry_lost() {
    let owner = pk(1);
    let mint = pk(2);
    let key = holding_account_for(&owner, &mint);

    let result = verify_evidence(&owner, &mint, &key, &owner, &mint, 0);

    assert!(matches!(result, Ok(CustodyStatus::Lost)));
}

#[test]
fn ut_foreign_account_rejected() {
    let owner = pk(1);
    let mint = pk(2);
    let key = holding_account_for(&pk(3), &mint);

    let result = verify_evidence(&owner, &mint, &key, &owner, &mint, 1);

    assert!(matches!(result, Err(StakeError::EvidenceMismatch)));
}

#[test]
fn ut_recorded_owner_mismatch_rejected() {
    let owner = pk(1);
    let mint = pk(2);
    let key = holding_account_for(&owner, &mint);

    let result = verify_evidence(&owner, &mint, &key, &pk(3), &mint, 1);

    assert!(matches!(result, Err(StakeError::EvidenceMismatch)));
}

#[test]
fn ut_recorded_mint_mismatch_rejected() {
    let owner = pk(1);
    let mint = pk(2);
    let key = holding_account_for(&owner, &mint);

    let result = verify_evidence(&owner, &mint, &key, &owner, &pk(3), 1);

    assert!(matches!(result, Err(StakeError::EvidenceMismatch)));
}

#[test]
fn ut_empty_balance_does_not_mask_wrong_evidence() {
    // A zero balance only excuses evidence that is correctly addressed.
    let owner = pk(1);
    let mint = pk(2);
    let key = holding_account_for(&pk(3), &mint);

    let result = verify_evidence(&owner, &mint, &key, &owner, &mint, 0);

    assert!(matches!(result, Err(StakeError::EvidenceMismatch)));
}
