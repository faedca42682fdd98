use std::str::FromStr;

use alloy::primitives::{Address, address};
use anyhow::{Result, anyhow};

pub const WBNB: Address = address!("0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c");

/// Parse a hex address the way operators paste them: with or without `0x`,
/// any casing, surrounding whitespace tolerated.
pub fn parse_address(raw: &str) -> Result<Address> {
    let s = raw.trim();
    let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    if s.len() != 40 {
        return Err(anyhow!("bad address `{}`: expected 20 bytes of hex", raw.trim()));
    }
    Address::from_str(s).map_err(|e| anyhow!("bad address `{}`: {e}", raw.trim()))
}

/// True when `token` is the wrapped native asset, i.e. a swap from it should
/// spend native value instead of an ERC20 balance.
pub fn is_wrapped_native(token: Address) -> bool {
    token == WBNB
}
