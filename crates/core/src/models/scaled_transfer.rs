use crate::prelude::*;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder, Serialize, derive_more::Display)]
#[display("{base_amount}{denom} -> {recipient}")]
pub struct ScaledTransfer {
    #[getset(get = "pub")]
    #[builder(into)]
    recipient: String,

    /// Amount in the smallest unit of `denom`.
    #[getset(get = "pub")]
    #[serde(serialize_with = "serialize_decimal")]
    base_amount: U256,

    #[getset(get = "pub")]
    #[builder(into)]
    denom: String,
}

fn serialize_decimal<S: Serializer>(amount: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(amount)
}
