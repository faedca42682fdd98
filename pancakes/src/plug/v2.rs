use alloy::primitives::Address;

alloy::sol! {
    #[sol(rpc)]
    interface IPancakeV2FactoryView {
        function getPair(address tokenA, address tokenB) view returns (address pair);
    }
}

/// Outcome of a factory `getPair` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairLookup {
    /// The factory returned the zero address: nobody has created the pair.
    NotFoundYet,
    Found(Address),
}

impl PairLookup {
    pub fn from_factory(pair: Address) -> Self {
        if pair.is_zero() {
            PairLookup::NotFoundYet
        } else {
            PairLookup::Found(pair)
        }
    }
}
