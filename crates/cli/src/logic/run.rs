use crate::prelude::*;

use std::{io::Write, process::ExitCode};

const FINALIZED_MESSAGE: &str = "finalized batch execution";

async fn broadcast<C: LedgerClient, W: Write>(
    parameters: &MultiSendParameters,
    instructions: Vec<TransferInstruction>,
    client: &mut C,
    out: &mut W,
) -> Result<Summary, CliError> {
    let broadcaster = BatchBroadcaster::builder()
        .parameters(*parameters.broadcast())
        .build();
    let summary = broadcaster
        .run(instructions, client, |progress| {
            if let Err(e) = writeln!(out, "{progress}") {
                warn!("Failed to print progress: {e}");
            }
        })
        .await?;
    writeln!(out, "{FINALIZED_MESSAGE}")?;
    Ok(summary)
}

async fn run_multi_send<W: Write>(args: MultiSendArgs, out: &mut W) -> Result<Summary, CliError> {
    let parameters = MultiSendParameters::try_from(args)?;
    let instructions = read_records(parameters.records_path())
        .map_err(Error::from)?
        .into_iter()
        .map(|record| record.into_instruction(parameters.denom().as_str()))
        .collect::<Vec<_>>();

    let summary = if *parameters.dry_run() {
        info!("Dry run, batches are printed instead of submitted");
        let mut client = DryRunClient::new(std::io::stdout());
        broadcast(&parameters, instructions, &mut client, out).await?
    } else {
        let mut client = SubstrateLedgerClient::connect(parameters.client().clone())
            .await
            .map_err(Error::from)?;
        broadcast(&parameters, instructions, &mut client, out).await?
    };
    debug!("{summary:?}");
    Ok(summary)
}

async fn run_subcommand<W: Write>(command: Command, out: &mut W) -> Result<(), CliError> {
    match command {
        Command::MultiSend(args) => run_multi_send(args, out).await.map(|_| ()),
    }
}

/// Runs the parsed command, writing progress lines to `out`.
pub async fn run_with_output<W: Write>(cli_args: CliArgs, out: &mut W) -> ExitCode {
    match run_subcommand(cli_args.command, out).await {
        Ok(()) => {
            info!("{} ran successfully", BINARY_NAME);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error running {}: {}", BINARY_NAME, e);
            if let Some(resume_from) = e.resume_from() {
                error!("Transfers before record {resume_from} are on chain, pass {resume_from} as START_INDEX to continue");
            }
            ExitCode::FAILURE
        }
    }
}

pub async fn run(cli_args: CliArgs) -> ExitCode {
    run_with_output(cli_args, &mut std::io::stdout()).await
}
