use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("Node url invalid {bad_value}")]
    NodeUrlInvalid { bad_value: String },

    #[error("Denomination cannot be empty")]
    DenomEmpty,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("{0}")]
    CoreError(#[from] Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub fn resume_from(&self) -> Option<usize> {
        match self {
            CliError::CoreError(e) => e.resume_from(),
            CliError::InvalidCliArgs(_) | CliError::Output(_) => None,
        }
    }
}
