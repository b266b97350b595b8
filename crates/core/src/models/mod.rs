mod batch;
mod broadcast_parameters;
mod error;
mod polka_signer;
mod progress;
mod run_state;
mod scaled_transfer;
mod substrate_client_parameters;
mod transfer_asset;
mod transfer_instruction;

pub use batch::*;
pub use broadcast_parameters::*;
pub use error::*;
pub use polka_signer::*;
pub use progress::*;
pub use run_state::*;
pub use scaled_transfer::*;
pub use substrate_client_parameters::*;
pub use transfer_asset::*;
pub use transfer_instruction::*;
