use crate::prelude::*;
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct MultiSendArgs {
    /// CSV file: a header row, then one `recipient,amount` row per transfer.
    csv_file: PathBuf,

    /// Denomination of every transfer, either the native denomination or an asset id.
    denom: String,

    /// Number of leading records to skip, e.g. the last progress count of an interrupted run.
    start_index: usize,

    /// Maximum number of transfers per transaction.
    threshold: usize,

    /// Websocket URL of the node to submit to.
    #[arg(long, default_value_t = DEFAULT_NODE_URL.to_owned())]
    node_url: String,

    /// Secret URI of the sending account.
    #[arg(long, default_value_t = DEFAULT_SIGNER_URI.to_owned())]
    from: String,

    /// Denomination name of the chain's native token.
    #[arg(long, default_value_t = DEFAULT_NATIVE_DENOM.to_owned())]
    native_denom: String,

    /// Print each batch as JSON instead of submitting it.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

impl TryFrom<MultiSendArgs> for MultiSendParameters {
    type Error = InvalidCliArgs;

    fn try_from(args: MultiSendArgs) -> Result<Self, Self::Error> {
        let Ok(node_url) = Url::parse(&args.node_url) else {
            return Err(InvalidCliArgs::NodeUrlInvalid {
                bad_value: args.node_url.clone(),
            });
        };
        if args.denom.trim().is_empty() {
            return Err(InvalidCliArgs::DenomEmpty);
        }

        let broadcast = BroadcastParameters::builder()
            .start_index(args.start_index)
            .threshold(args.threshold)
            .build();
        let client = SubstrateClientParameters::builder()
            .node_url(node_url)
            .signer_uri(args.from)
            .native_denom(args.native_denom)
            .build();

        Ok(MultiSendParameters::builder()
            .records_path(args.csv_file)
            .denom(args.denom)
            .broadcast(broadcast)
            .client(client)
            .dry_run(args.dry_run)
            .build())
    }
}
