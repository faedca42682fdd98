pub mod addresses;
pub mod pancake_swap_v2;
