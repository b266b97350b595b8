use crate::prelude::*;

/// Emitted after each batch the ledger accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Builder, derive_more::Display)]
#[display("executed batch {processed}/{total}")]
pub struct Progress {
    #[getset(get = "pub")]
    batch_number: usize,

    #[getset(get = "pub")]
    batch_len: usize,

    /// Records handled so far, counting skipped ones. Usable as the next start index.
    #[getset(get = "pub")]
    processed: usize,

    #[getset(get = "pub")]
    total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Builder, derive_more::Display)]
#[display("submitted {transfers_submitted} transfers across {batches_submitted} batches")]
pub struct Summary {
    #[getset(get = "pub")]
    total_count: usize,

    #[getset(get = "pub")]
    start_index: usize,

    #[getset(get = "pub")]
    transfers_submitted: usize,

    #[getset(get = "pub")]
    batches_submitted: usize,
}

impl Summary {
    pub fn nothing_sent(&self) -> bool {
        self.batches_submitted == 0
    }
}
