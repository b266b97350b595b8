use crate::prelude::*;

/// Mutable bookkeeping of a single run. Owned by the run, dropped when it ends.
#[derive(Debug, Getters)]
pub struct RunState {
    #[getset(get = "pub")]
    start_index: usize,

    #[getset(get = "pub")]
    threshold: usize,

    #[getset(get = "pub")]
    total_count: usize,

    #[getset(get = "pub")]
    current_batch: Vec<ScaledTransfer>,

    /// Index of the first record in `current_batch`.
    batch_first_index: usize,

    #[getset(get = "pub")]
    batches_submitted: usize,

    #[getset(get = "pub")]
    transfers_submitted: usize,
}

impl RunState {
    pub fn new(parameters: &BroadcastParameters, total_count: usize) -> Result<Self, InvalidConfig> {
        parameters.validate(total_count)?;
        let threshold = *parameters.threshold();
        Ok(Self {
            start_index: *parameters.start_index(),
            threshold,
            total_count,
            current_batch: Vec::with_capacity(threshold.min(total_count)),
            batch_first_index: *parameters.start_index(),
            batches_submitted: 0,
            transfers_submitted: 0,
        })
    }

    /// Appends the transfer read at `index`, returning `true` once the batch must be flushed:
    /// either it reached the threshold or `index` is the last record of the input.
    pub fn push(&mut self, index: usize, transfer: ScaledTransfer) -> bool {
        if self.current_batch.is_empty() {
            self.batch_first_index = index;
        }
        self.current_batch.push(transfer);
        self.current_batch.len() >= self.threshold || index + 1 == self.total_count
    }

    /// Hands out the accumulated batch and starts a fresh one.
    pub fn take_batch(&mut self) -> Batch {
        let transfers = std::mem::replace(
            &mut self.current_batch,
            Vec::with_capacity(self.threshold.min(self.total_count)),
        );
        Batch::builder()
            .number(self.batches_submitted + 1)
            .first_index(self.batch_first_index)
            .transfers(transfers)
            .build()
    }

    pub fn record_success(&mut self, batch: &Batch) -> Progress {
        self.batches_submitted += 1;
        self.transfers_submitted += batch.len();
        Progress::builder()
            .batch_number(*batch.number())
            .batch_len(batch.len())
            .processed(batch.records().end)
            .total(self.total_count)
            .build()
    }

    /// Start index that skips everything submitted so far.
    pub fn resume_from(&self) -> usize {
        self.start_index + self.transfers_submitted
    }

    pub fn summary(&self) -> Summary {
        Summary::builder()
            .total_count(self.total_count)
            .start_index(self.start_index)
            .transfers_submitted(self.transfers_submitted)
            .batches_submitted(self.batches_submitted)
            .build()
    }
}
