mod batch_broadcaster;
mod dry_run_client;
mod ledger_client;
mod read_records;
mod scale_amount;
mod substrate_client;

pub use batch_broadcaster::*;
pub use dry_run_client::*;
pub use ledger_client::*;
pub use read_records::*;
pub use scale_amount::*;
pub use substrate_client::*;
