use crate::prelude::*;

/// Turns one [`Batch`] into one ledger transaction.
///
/// Implementations build a single transaction holding one transfer per element of the batch,
/// sign it as the run-wide sender, broadcast it and return once the ledger accepted or
/// rejected it. They are called strictly one batch at a time.
#[allow(async_fn_in_trait)]
pub trait LedgerClient {
    async fn submit(&mut self, batch: &Batch) -> Result<(), SubmitError>;
}
