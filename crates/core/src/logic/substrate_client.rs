use std::{str::FromStr, sync::Arc, time::Duration};

use crate::prelude::*;

use jsonrpsee_client_transport::ws::WsTransportClientBuilder;
use jsonrpsee_core::client::Client;
use subxt::{
    backend::legacy::LegacyBackend,
    config::DefaultExtrinsicParamsBuilder,
    dynamic::Value,
    tx::DynamicPayload,
    utils::AccountId32,
};

async fn create_api(node_url: Url) -> Result<Api, BootstrapError> {
    let (node_sender, node_receiver) = WsTransportClientBuilder::default()
        .build(node_url)
        .await
        .map_err(|e| BootstrapError::CreateApiFailure {
            underlying: format!("{e:?}"),
        })?;

    let client = Client::builder()
        .request_timeout(Duration::from_secs(3600))
        .build_with_tokio(node_sender, node_receiver);

    let backend = LegacyBackend::builder().build(client);
    Api::from_backend(Arc::new(backend))
        .await
        .map_err(|e| BootstrapError::CreateApiFailure {
            underlying: format!("{e:?}"),
        })
}

/// One `Balances` or `Assets` transfer call for a single transfer.
pub fn transfer_call(transfer: &ScaledTransfer, native_denom: &str) -> Result<Value, SubmitError> {
    let dest = AccountId32::from_str(transfer.recipient()).map_err(|e| {
        SubmitError::InvalidRecipient {
            recipient: transfer.recipient().clone(),
            underlying: e.to_string(),
        }
    })?;
    if *transfer.base_amount() > U256::from(u128::MAX) {
        return Err(SubmitError::AmountOutOfRange {
            recipient: transfer.recipient().clone(),
            amount: *transfer.base_amount(),
        });
    }
    let amount = transfer.base_amount().low_u128();
    let dest = Value::unnamed_variant("Id", [Value::from_bytes(dest.0)]);

    let call = match TransferAsset::resolve(transfer.denom(), native_denom)? {
        TransferAsset::Native => subxt::dynamic::tx(
            "Balances",
            "transfer_keep_alive",
            vec![dest, Value::u128(amount)],
        ),
        TransferAsset::Asset(asset_id) => subxt::dynamic::tx(
            "Assets",
            "transfer_keep_alive",
            vec![Value::u128(u128::from(asset_id)), dest, Value::u128(amount)],
        ),
    };
    Ok(call.into_value())
}

/// Wraps all transfers of `batch` into one `Utility::batch_all`, which dispatches all of them
/// or none.
pub fn batch_payload(batch: &Batch, native_denom: &str) -> Result<DynamicPayload, SubmitError> {
    let calls = batch
        .transfers()
        .iter()
        .map(|transfer| transfer_call(transfer, native_denom))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(subxt::dynamic::tx(
        "Utility",
        "batch_all",
        vec![Value::unnamed_composite(calls)],
    ))
}

/// Submits batches to a Substrate node from a single sr25519 account, tracking its nonce
/// locally so consecutive batches carry consecutive nonces.
pub struct SubstrateLedgerClient {
    api: Api,
    signer: PolkaSigner,
    native_denom: String,
    nonce: u64,
}

impl SubstrateLedgerClient {
    pub async fn connect(parameters: SubstrateClientParameters) -> Result<Self, BootstrapError> {
        let signer = PolkaSigner::from_secret_uri(parameters.signer_uri())?;
        info!("Connecting to {}", parameters.node_url());
        let api = create_api(parameters.node_url().clone()).await?;

        let nonce = api
            .tx()
            .account_nonce(signer.account_id())
            .await
            .map_err(|e| BootstrapError::NonceFetchFailed {
                account: signer.account_id().to_string(),
                underlying: e.to_string(),
            })?;
        info!("Sending from {} starting at nonce {nonce}", signer.account_id());

        Ok(Self {
            api,
            signer,
            native_denom: parameters.native_denom().clone(),
            nonce,
        })
    }
}

impl LedgerClient for SubstrateLedgerClient {
    async fn submit(&mut self, batch: &Batch) -> Result<(), SubmitError> {
        let payload = batch_payload(batch, &self.native_denom)?;
        let tx_params = DefaultExtrinsicParamsBuilder::<PolkadotConfig>::new()
            .nonce(self.nonce)
            .build();
        let tx = self
            .api
            .tx()
            .create_partial_offline(&payload, tx_params)
            .map_err(|e| SubmitError::BuildFailed {
                underlying: e.to_string(),
            })?
            .sign(&self.signer);

        debug!(
            "Broadcasting batch {} from {} with nonce {}",
            batch.number(),
            self.signer.account_id(),
            self.nonce
        );
        let progress = tx
            .submit_and_watch()
            .await
            .map_err(|e| SubmitError::BroadcastFailed {
                underlying: e.to_string(),
            })?;
        let events = progress
            .wait_for_finalized_success()
            .await
            .map_err(|e| SubmitError::Rejected {
                underlying: e.to_string(),
            })?;
        debug!(
            "Batch {} finalized as extrinsic {:?}",
            batch.number(),
            events.extrinsic_hash()
        );

        self.nonce += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOB_SS58: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

    fn transfer(recipient: &str, base_amount: U256, denom: &str) -> ScaledTransfer {
        ScaledTransfer::builder()
            .recipient(recipient)
            .base_amount(base_amount)
            .denom(denom)
            .build()
    }

    #[test]
    fn builds_native_and_asset_transfers() {
        assert!(transfer_call(&transfer(BOB_SS58, U256::from(10u8), "unit"), "unit").is_ok());
        assert!(transfer_call(&transfer(BOB_SS58, U256::from(10u8), "1984"), "unit").is_ok());
    }

    #[test]
    fn rejects_non_ss58_recipients() {
        let err = transfer_call(&transfer("addrA", U256::one(), "unit"), "unit").unwrap_err();
        assert!(matches!(err, SubmitError::InvalidRecipient { .. }));
    }

    #[test]
    fn rejects_amounts_beyond_u128() {
        let amount = U256::from(u128::MAX) + U256::one();
        let err = transfer_call(&transfer(BOB_SS58, amount, "unit"), "unit").unwrap_err();
        assert!(matches!(err, SubmitError::AmountOutOfRange { .. }));

        let max = transfer(BOB_SS58, U256::from(u128::MAX), "unit");
        assert!(transfer_call(&max, "unit").is_ok());
    }

    #[test]
    fn unknown_denom_fails_the_whole_batch() {
        let batch = Batch::builder()
            .number(1)
            .first_index(0)
            .transfers(vec![
                transfer(BOB_SS58, U256::one(), "unit"),
                transfer(BOB_SS58, U256::one(), "uatom"),
            ])
            .build();
        assert!(matches!(
            batch_payload(&batch, "unit"),
            Err(SubmitError::UnsupportedDenom { .. })
        ));
    }
}
