use crate::prelude::*;

pub const DEFAULT_NODE_URL: &str = "ws://127.0.0.1:9944";
pub const DEFAULT_SIGNER_URI: &str = "//Alice";
pub const DEFAULT_NATIVE_DENOM: &str = "unit";

#[derive(Debug, Clone, Getters, Builder)]
pub struct SubstrateClientParameters {
    #[getset(get = "pub")]
    node_url: Url,

    /// Secret URI of the sending account.
    #[getset(get = "pub")]
    #[builder(into)]
    signer_uri: String,

    /// Denomination transferred through the `Balances` pallet.
    #[getset(get = "pub")]
    #[builder(into)]
    native_denom: String,
}

pub type Api = OnlineClient<PolkadotConfig>;
