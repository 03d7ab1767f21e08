pub mod claim;
pub mod create_holding_account;
pub mod fund;
pub mod initialize;
pub mod stake;
pub mod unstake;

pub use claim::*;
pub use create_holding_account::*;
pub use fund::*;
pub use initialize::*;
pub use stake::*;
pub use unstake::*;
