use nft_staking::error::StakeError;
use nft_staking::utils::accrued_reward;

// 5 whole reward tokens of 9 decimals per staked item per day.
const RATE: u64 = 5_000_000_000;

// =====================================================
// ACCRUAL FORMULA
// =====================================================

#[test]
fn ut_reward_zero_for_zero_elapsed() {
    assert_eq!(accrued_reward(1_000, 1_000, RATE).ok(), Some(0));
}

#[test]
fn ut_reward_full_day_pays_full_rate() {
    assert_eq!(accrued_reward(0, 86_400, RATE).ok(), Some(RATE));
}

#[test]
fn ut_reward_scales_linearly_with_days() {
    assert_eq!(accrued_reward(0, 3 * 86_400, RATE).ok(), Some(3 * RATE));
}

#[test]
fn ut_reward_positive_for_one_second() {
    assert_eq!(accrued_reward(0, 1, RATE).ok(), Some(57_870));
}

#[test]
fn ut_reward_partial_interval_floors() {
    // 101 units per day over half a day is 50.5, floored.
    assert_eq!(accrued_reward(0, 43_200, 101).ok(), Some(50));
}

#[test]
fn ut_back_to_back_settlement_accrues_nothing() {
    let now = 1_700_000_000;

    let first = accrued_reward(now - 86_400, now, RATE).ok();
    let second = accrued_reward(now, now, RATE).ok();

    assert_eq!(first, Some(RATE));
    assert_eq!(second, Some(0));
}

// =====================================================
// ARITHMETIC SAFETY
// =====================================================

#[test]
fn ut_reward_negative_elapsed_rejected() {
    let result = accrued_reward(2_000, 1_000, RATE);

    assert!(matches!(result, Err(StakeError::ArithmeticOverflow)));
}

#[test]
fn ut_reward_elapsed_difference_overflow_rejected() {
    let result = accrued_reward(i64::MIN, i64::MAX, RATE);

    assert!(matches!(result, Err(StakeError::ArithmeticOverflow)));
}

#[test]
fn ut_reward_multiplication_overflow_rejected() {
    let result = accrued_reward(0, i64::MAX, u64::MAX);

    assert!(matches!(result, Err(StakeError::ArithmeticOverflow)));
}
