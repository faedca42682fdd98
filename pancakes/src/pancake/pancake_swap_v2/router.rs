use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;

use crate::pancake::pancake_swap_v2::path::path2;

/// Render a base-unit amount as a decimal string, trailing zeros trimmed.
/// Works on the digits, so any `decimals` is fine (10^78 does not fit U256).
pub fn format_token(amount: U256, decimals: u32) -> String {
    let width = decimals as usize;
    let digits = format!("{:0>w$}", amount.to_string(), w = width + 1);
    let (whole, frac) = digits.split_at(digits.len() - width);
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        return whole.to_string();
    }
    format!("{whole}.{frac}")
}

alloy::sol! {
    #[sol(rpc)]
    interface IPancakeRouter02 {
        function WETH() pure returns (address);
        function factory() pure returns (address);

        function swapExactETHForTokens(
            uint amountOutMin,
            address[] calldata path,
            address to,
            uint deadline
        ) external payable returns (uint[] memory amounts);

        function swapExactTokensForTokens(
            uint amountIn,
            uint amountOutMin,
            address[] calldata path,
            address to,
            uint deadline
        ) external returns (uint[] memory amounts);
    }

    #[sol(rpc)]
    interface IERC20 {
        function allowance(address owner, address spender) view returns (uint256);
        function approve(address spender, uint256 value) returns (bool);
        function balanceOf(address owner) view returns (uint256);
        function decimals() view returns (uint8);
    }
}

/// Calldata plus the native value that must ride along with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterCall {
    pub value: U256,
    pub input: Bytes,
}

/// Encode an exact-in swap over `[token_in, token_out]`.
///
/// With `native_in` the amount travels as `msg.value` into
/// `swapExactETHForTokens`; otherwise it is the `amountIn` argument of
/// `swapExactTokensForTokens` and no value is attached.
pub fn encode_exact_in(
    native_in: bool,
    token_in: Address,
    token_out: Address,
    amount_in: U256,
    amount_out_min: U256,
    to: Address,
    deadline: U256,
) -> RouterCall {
    let path = path2(token_in, token_out);
    if native_in {
        let call = IPancakeRouter02::swapExactETHForTokensCall {
            amountOutMin: amount_out_min,
            path,
            to,
            deadline,
        };
        RouterCall { value: amount_in, input: call.abi_encode().into() }
    } else {
        let call = IPancakeRouter02::swapExactTokensForTokensCall {
            amountIn: amount_in,
            amountOutMin: amount_out_min,
            path,
            to,
            deadline,
        };
        RouterCall { value: U256::ZERO, input: call.abi_encode().into() }
    }
}

/// `approve(spender, MAX)` calldata.
pub fn encode_approve_max(spender: Address) -> Bytes {
    IERC20::approveCall { spender, value: U256::MAX }.abi_encode().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const IN: Address = address!("0x1111111111111111111111111111111111111111");
    const OUT: Address = address!("0x2222222222222222222222222222222222222222");
    const TO: Address = address!("0x3333333333333333333333333333333333333333");

    #[test]
    fn format_token_trims() {
        assert_eq!(format_token(U256::from(2_500_000_000_000_000_000u128), 18), "2.5");
        assert_eq!(format_token(U256::from(7u64), 0), "7");
        assert_eq!(format_token(U256::from(1u64), 6), "0.000001");
        assert_eq!(format_token(U256::ZERO, 18), "0");
        assert_eq!(format_token(U256::from(1_000u64), 3), "1");
    }

    #[test]
    fn format_token_past_u256_precision() {
        let s = format_token(U256::from(15u64), 100);
        assert_eq!(s, format!("0.{}15", "0".repeat(98)));
        assert_eq!(format_token(U256::from(3u64), 255).len(), 2 + 255);
    }

    #[test]
    fn native_swap_carries_value_not_argument() {
        let amount = U256::from(1_000u64);
        let call = encode_exact_in(true, IN, OUT, amount, U256::ZERO, TO, U256::from(9u64));
        assert_eq!(call.value, amount);
        let decoded = IPancakeRouter02::swapExactETHForTokensCall::abi_decode(&call.input).unwrap();
        assert_eq!(decoded.path, vec![IN, OUT]);
        assert_eq!(decoded.amountOutMin, U256::ZERO);
        assert_eq!(decoded.to, TO);
    }

    #[test]
    fn token_swap_carries_argument_not_value() {
        let amount = U256::from(1_000u64);
        let call = encode_exact_in(false, IN, OUT, amount, U256::ZERO, TO, U256::from(9u64));
        assert_eq!(call.value, U256::ZERO);
        let decoded =
            IPancakeRouter02::swapExactTokensForTokensCall::abi_decode(&call.input).unwrap();
        assert_eq!(decoded.amountIn, amount);
        assert_eq!(decoded.deadline, U256::from(9u64));
    }
}
