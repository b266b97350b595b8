use crate::prelude::*;

use std::ops::Range;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] InvalidConfig),

    #[error("Invalid amount in record {index}: {underlying} (resume with start index {resume_from})")]
    InvalidAmount {
        index: usize,
        resume_from: usize,
        underlying: InvalidAmount,
    },

    #[error(
        "Batch {batch_number} (records {}..{}) failed after {batches_succeeded} successful batches: {underlying} (resume with start index {resume_from})",
        .records.start,
        .records.end
    )]
    SubmitFailed {
        batch_number: usize,
        records: Range<usize>,
        batches_succeeded: usize,
        transfers_succeeded: usize,
        resume_from: usize,
        underlying: SubmitError,
    },

    #[error("Failed to read records: {0}")]
    ReadRecords(#[from] ReadRecordsError),

    #[error("Bootstrap error {0}")]
    Bootstrap(#[from] BootstrapError),
}

impl Error {
    /// The start index a follow-up run should use, when the failure happened mid-run.
    pub fn resume_from(&self) -> Option<usize> {
        match self {
            Error::InvalidAmount { resume_from, .. } | Error::SubmitFailed { resume_from, .. } => {
                Some(*resume_from)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfig {
    #[error("Threshold must be at least 1")]
    ThresholdMustBePositive,

    #[error("Start index {start_index} is beyond the {total_count} available records")]
    StartIndexOutOfRange {
        start_index: usize,
        total_count: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAmount {
    #[error("Amount is empty")]
    Empty,

    #[error("Amount {bad_value:?} is negative")]
    Negative { bad_value: String },

    #[error("Amount {bad_value:?} is not a decimal number")]
    Malformed { bad_value: String },

    #[error("Amount {bad_value:?} does not fit in 256 bits once scaled")]
    Overflow { bad_value: String },
}

/// Failure of the ledger client to get a batch accepted.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Recipient {recipient} is not a valid address: {underlying}")]
    InvalidRecipient {
        recipient: String,
        underlying: String,
    },

    #[error("Amount {amount} for {recipient} exceeds the ledger balance type")]
    AmountOutOfRange { recipient: String, amount: U256 },

    #[error("Denomination {denom:?} is neither the native token nor an asset id")]
    UnsupportedDenom { denom: String },

    #[error("Failed to build transaction: {underlying}")]
    BuildFailed { underlying: String },

    #[error("Failed to broadcast transaction: {underlying}")]
    BroadcastFailed { underlying: String },

    #[error("Transaction rejected: {underlying}")]
    Rejected { underlying: String },

    #[error("Failed to render batch: {underlying}")]
    RenderFailed { underlying: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ReadRecordsError {
    #[error("Failed to open {path}: {underlying}")]
    OpenFailed {
        path: String,
        underlying: std::io::Error,
    },

    #[error("Malformed CSV: {underlying}")]
    Csv { underlying: csv::Error },

    #[error("Line {line} has {found} columns, expected at least 2 (recipient, amount)")]
    MissingColumns { line: u64, found: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to create API client: {underlying}")]
    CreateApiFailure { underlying: String },

    #[error("Invalid signer secret URI: {underlying}")]
    InvalidSignerUri { underlying: String },

    #[error("Failed to fetch nonce of {account}: {underlying}")]
    NonceFetchFailed { account: String, underlying: String },
}
