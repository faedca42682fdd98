//! PancakeSwap v2 (BSC) utilities using Alloy only.
//!
//! Scope: exact-in swaps over a fixed two-token path, no quoting.

pub mod addresses;
pub mod path;
pub mod router;

pub use addresses::*;
pub use path::*;
pub use router::*;
