//! Factory-side lookups: resolving the pair account for two tokens.

pub mod v2;

pub use v2::*;
