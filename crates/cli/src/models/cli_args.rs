use crate::prelude::*;
use clap::{Parser, Subcommand};

pub const BINARY_NAME: &str = "multisend";

/// Disburse funds to many recipients, batching transfers into atomic transactions.
#[derive(Debug, Parser)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute transfers listed in a CSV file, `threshold` transfers per transaction.
    MultiSend(MultiSendArgs),
}
