use crate::prelude::*;

use serde::Serialize;
use std::ops::Range;

/// Transfers submitted together as one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder, Serialize)]
pub struct Batch {
    /// 1-based position of the batch within its run.
    #[getset(get = "pub")]
    number: usize,

    /// Index of the first record of this batch in the full input.
    #[getset(get = "pub")]
    first_index: usize,

    #[getset(get = "pub")]
    transfers: Vec<ScaledTransfer>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Indices of the carried records in the full input.
    pub fn records(&self) -> Range<usize> {
        self.first_index..self.first_index + self.len()
    }
}
