// PDA seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const AUTHORITY_SEED: &[u8] = b"authority";
pub const LEDGER_SEED: &[u8] = b"ledger";

pub const SECONDS_PER_DAY: i64 = 86_400;
