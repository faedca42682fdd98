use std::time::{SystemTime, UNIX_EPOCH};

use alloy::primitives::{Address, U256};

/// Deadline used when none is configured; far enough out that the router
/// never rejects on time.
pub const FAR_DEADLINE: u64 = 99_999_999_999;

pub fn path2(token_in: Address, token_out: Address) -> Vec<Address> {
    vec![token_in, token_out]
}

/// Absolute router deadline `secs` from now, or [`FAR_DEADLINE`] when `None`.
pub fn deadline_after(secs: Option<u64>) -> U256 {
    match secs {
        Some(secs) => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            U256::from(now + secs)
        }
        None => U256::from(FAR_DEADLINE),
    }
}
