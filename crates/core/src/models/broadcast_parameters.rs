use crate::prelude::*;

/// How a run walks its input: where to resume and how large each batch may grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Builder)]
pub struct BroadcastParameters {
    /// Number of leading records to skip entirely.
    #[getset(get = "pub")]
    #[builder(default)]
    start_index: usize,

    /// Maximum number of transfers per batch.
    #[getset(get = "pub")]
    threshold: usize,
}

impl BroadcastParameters {
    /// Checks the parameters against an input of `total_count` records.
    pub fn validate(&self, total_count: usize) -> Result<(), InvalidConfig> {
        if self.threshold == 0 {
            return Err(InvalidConfig::ThresholdMustBePositive);
        }
        if self.start_index > total_count {
            return Err(InvalidConfig::StartIndexOutOfRange {
                start_index: self.start_index,
                total_count,
            });
        }
        Ok(())
    }
}
