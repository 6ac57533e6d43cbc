// Seeds
pub const CARNIVAL_SEED: &[u8] = b"carnival";
pub const STALL_SEED: &[u8] = b"stall";
pub const PAYMENT_SEED: &[u8] = b"payment";
pub const REVENUE_INDEX_SEED: &[u8] = b"revenue_index";

// Stall registration
pub const MAX_STALL_NAME: usize = 32;
pub const MIN_DURATION_UNITS: u8 = 1;
pub const MAX_DURATION_UNITS: u8 = 3;

// The revenue index is deserialized on every payment, so it must fit the 32 KiB heap
pub const MAX_INDEXED_STALLS: u64 = 1_024;
pub const DEFAULT_MAX_STALLS: u64 = MAX_INDEXED_STALLS;

// Ranking output: ids + revenues must fit in 1 KiB of return data
pub const MAX_TOP_STALLS: u64 = 48;
