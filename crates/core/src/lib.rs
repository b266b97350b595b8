//! Batch disbursement: scale decimal amounts into base units, group transfers into bounded
//! batches and submit each batch as one atomic transaction, in order, with resumable progress.

mod logic;
mod models;

pub mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    // Polkadot/Substrate Crates
    pub use sp_core::U256;
    pub use subxt::{OnlineClient, PolkadotConfig};

    // Third Party Crates
    pub use bon::Builder;
    pub use getset::Getters;
    pub use log::{debug, error, info, trace, warn};
    pub use url::Url;
}
