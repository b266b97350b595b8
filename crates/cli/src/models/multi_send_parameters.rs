use crate::prelude::*;

use std::path::PathBuf;

#[derive(Debug, Clone, Getters, Builder)]
pub struct MultiSendParameters {
    #[getset(get = "pub")]
    records_path: PathBuf,

    #[getset(get = "pub")]
    denom: String,

    #[getset(get = "pub")]
    broadcast: BroadcastParameters,

    #[getset(get = "pub")]
    client: SubstrateClientParameters,

    #[getset(get = "pub")]
    dry_run: bool,
}
