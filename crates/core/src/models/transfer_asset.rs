use crate::prelude::*;

/// Which pallet moves the funds of a given denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferAsset {
    /// The chain's native token, via `Balances`.
    Native,
    /// A fungible asset of the `Assets` pallet, by id.
    Asset(u32),
}

impl TransferAsset {
    pub fn resolve(denom: &str, native_denom: &str) -> Result<Self, SubmitError> {
        if denom == native_denom {
            return Ok(Self::Native);
        }
        denom
            .parse::<u32>()
            .map(Self::Asset)
            .map_err(|_| SubmitError::UnsupportedDenom {
                denom: denom.to_owned(),
            })
    }
}
