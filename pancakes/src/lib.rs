//! Bindings and helpers for UniswapV2-style DEXes on BNB Smart Chain.
//!
//! Only what a pair sniper needs: factory pair lookup, the two exact-in
//! router entry points, and the ERC20 reads around them.

pub mod pancake;
pub mod plug;
