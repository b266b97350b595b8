use crate::prelude::*;

/// Drives a run: skips to the start index, groups scaled transfers into batches and hands each
/// batch to a [`LedgerClient`], one at a time, in input order.
#[derive(Debug, Clone, Getters, Builder)]
pub struct BatchBroadcaster {
    #[getset(get = "pub")]
    parameters: BroadcastParameters,
}

impl BatchBroadcaster {
    /// Submits every instruction from the start index onwards.
    ///
    /// Amounts are scaled as records are reached, so a malformed amount aborts the run at that
    /// record; batches flushed before it stay submitted. The first failed submission aborts the
    /// run as well, nothing is retried. Both errors carry the start index to resume from.
    /// `on_progress` is called once per accepted batch.
    pub async fn run<I, C, P>(
        &self,
        instructions: I,
        client: &mut C,
        mut on_progress: P,
    ) -> Result<Summary>
    where
        I: IntoIterator<Item = TransferInstruction>,
        I::IntoIter: ExactSizeIterator,
        C: LedgerClient,
        P: FnMut(&Progress),
    {
        let instructions = instructions.into_iter();
        let total_count = instructions.len();
        let mut state = RunState::new(&self.parameters, total_count)?;
        info!(
            "Broadcasting records {}..{} in batches of at most {}",
            state.start_index(),
            total_count,
            state.threshold()
        );

        for (index, instruction) in instructions.enumerate().skip(*state.start_index()) {
            let transfer = instruction
                .scale()
                .map_err(|underlying| Error::InvalidAmount {
                    index,
                    resume_from: state.resume_from(),
                    underlying,
                })?;
            if !state.push(index, transfer) {
                continue;
            }

            let batch = state.take_batch();
            debug!(
                "Submitting batch {} with {} transfers (records {:?})",
                batch.number(),
                batch.len(),
                batch.records()
            );
            if let Err(underlying) = client.submit(&batch).await {
                warn!("Batch {} failed: {underlying}", batch.number());
                return Err(Error::SubmitFailed {
                    batch_number: *batch.number(),
                    records: batch.records(),
                    batches_succeeded: *state.batches_submitted(),
                    transfers_succeeded: *state.transfers_submitted(),
                    resume_from: state.resume_from(),
                    underlying,
                });
            }
            let progress = state.record_success(&batch);
            debug!(
                "Batch {} accepted with {} transfers",
                progress.batch_number(),
                progress.batch_len()
            );
            on_progress(&progress);
        }

        let summary = state.summary();
        if summary.nothing_sent() {
            info!(
                "Nothing to submit, start index {} covers all {} records",
                summary.start_index(),
                summary.total_count()
            );
        } else {
            info!("{summary}");
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every submitted batch, optionally failing on one batch number.
    #[derive(Default)]
    struct RecordingClient {
        batches: Vec<Batch>,
        fail_on: Option<usize>,
    }

    impl RecordingClient {
        fn failing_on(batch_number: usize) -> Self {
            Self {
                fail_on: Some(batch_number),
                ..Default::default()
            }
        }

        fn submitted_transfers(&self) -> Vec<ScaledTransfer> {
            self.batches
                .iter()
                .flat_map(|b| b.transfers().clone())
                .collect()
        }
    }

    impl LedgerClient for RecordingClient {
        async fn submit(&mut self, batch: &Batch) -> Result<(), SubmitError> {
            if self.fail_on == Some(*batch.number()) {
                return Err(SubmitError::Rejected {
                    underlying: "sequence mismatch".to_owned(),
                });
            }
            self.batches.push(batch.clone());
            Ok(())
        }
    }

    fn instruction(recipient: &str, amount: &str) -> TransferInstruction {
        TransferInstruction::builder()
            .recipient(recipient)
            .amount(amount)
            .denom("uatom")
            .build()
    }

    fn instructions(n: usize) -> Vec<TransferInstruction> {
        (0..n)
            .map(|i| instruction(&format!("addr{i}"), &format!("{i}.5")))
            .collect()
    }

    fn broadcaster(start_index: usize, threshold: usize) -> BatchBroadcaster {
        BatchBroadcaster::builder()
            .parameters(
                BroadcastParameters::builder()
                    .start_index(start_index)
                    .threshold(threshold)
                    .build(),
            )
            .build()
    }

    fn scaled_suffix(input: &[TransferInstruction], start_index: usize) -> Vec<ScaledTransfer> {
        input[start_index..]
            .iter()
            .cloned()
            .map(|i| i.scale().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn three_records_in_batches_of_two() {
        let input = vec![
            instruction("addrA", "1.5"),
            instruction("addrB", "2.0"),
            instruction("addrC", "0.25"),
        ];
        let mut client = RecordingClient::default();
        let mut progress = Vec::new();

        let summary = broadcaster(0, 2)
            .run(input, &mut client, |p| progress.push(*p))
            .await
            .unwrap();

        let expected = |recipient: &str, amount: &str| {
            ScaledTransfer::builder()
                .recipient(recipient)
                .base_amount(U256::from_dec_str(amount).unwrap())
                .denom("uatom")
                .build()
        };
        assert_eq!(client.batches.len(), 2);
        assert_eq!(
            client.batches[0].transfers(),
            &vec![
                expected("addrA", "1500000000000000000"),
                expected("addrB", "2000000000000000000"),
            ]
        );
        assert_eq!(
            client.batches[1].transfers(),
            &vec![expected("addrC", "250000000000000000")]
        );
        assert_eq!(*summary.transfers_submitted(), 3);
        assert_eq!(*summary.batches_submitted(), 2);
        assert_eq!(
            progress.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["executed batch 2/3", "executed batch 3/3"]
        );
    }

    #[tokio::test]
    async fn submit_count_and_order_match_the_input() {
        for total in 0..8 {
            let input = instructions(total);
            for start_index in 0..=total {
                for threshold in 1..=total + 1 {
                    let mut client = RecordingClient::default();
                    broadcaster(start_index, threshold)
                        .run(input.clone(), &mut client, |_| {})
                        .await
                        .unwrap();

                    let remaining = total - start_index;
                    assert_eq!(
                        client.batches.len(),
                        remaining.div_ceil(threshold),
                        "total {total}, start {start_index}, threshold {threshold}"
                    );
                    assert!(client.batches.iter().all(|b| b.len() <= threshold));
                    assert_eq!(
                        client.submitted_transfers(),
                        scaled_suffix(&input, start_index)
                    );
                }
            }
        }
    }

    #[tokio::test]
    async fn start_at_end_submits_nothing() {
        let mut client = RecordingClient::default();
        let summary = broadcaster(4, 2)
            .run(instructions(4), &mut client, |_| {})
            .await
            .unwrap();
        assert!(client.batches.is_empty());
        assert!(summary.nothing_sent());
    }

    #[tokio::test]
    async fn empty_input_succeeds_trivially() {
        let mut client = RecordingClient::default();
        let summary = broadcaster(0, 3)
            .run(Vec::new(), &mut client, |_| {})
            .await
            .unwrap();
        assert!(client.batches.is_empty());
        assert_eq!(*summary.total_count(), 0);
    }

    #[tokio::test]
    async fn large_threshold_sends_one_batch() {
        let input = instructions(5);
        let mut client = RecordingClient::default();
        broadcaster(2, 3)
            .run(input.clone(), &mut client, |_| {})
            .await
            .unwrap();
        assert_eq!(client.batches.len(), 1);
        assert_eq!(client.batches[0].records(), 2..5);
        assert_eq!(client.submitted_transfers(), scaled_suffix(&input, 2));
    }

    #[tokio::test]
    async fn failure_stops_the_run() {
        let mut client = RecordingClient::failing_on(3);
        let mut progress = Vec::new();
        let err = broadcaster(0, 2)
            .run(instructions(9), &mut client, |p| progress.push(*p))
            .await
            .unwrap_err();

        assert_eq!(client.batches.len(), 2);
        assert_eq!(progress.len(), 2);
        match err {
            Error::SubmitFailed {
                batch_number,
                records,
                batches_succeeded,
                transfers_succeeded,
                resume_from,
                underlying,
            } => {
                assert_eq!(batch_number, 3);
                assert_eq!(records, 4..6);
                assert_eq!(batches_succeeded, 2);
                assert_eq!(transfers_succeeded, 4);
                assert_eq!(resume_from, 4);
                assert!(matches!(underlying, SubmitError::Rejected { .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn resuming_reproduces_the_remaining_batches() {
        let input = instructions(7);

        let mut uninterrupted = RecordingClient::default();
        broadcaster(0, 3)
            .run(input.clone(), &mut uninterrupted, |_| {})
            .await
            .unwrap();

        let mut interrupted = RecordingClient::failing_on(2);
        let err = broadcaster(0, 3)
            .run(input.clone(), &mut interrupted, |_| {})
            .await
            .unwrap_err();
        let resume_from = err.resume_from().unwrap();
        assert_eq!(resume_from, 3);

        let mut resumed = RecordingClient::default();
        broadcaster(resume_from, 3)
            .run(input, &mut resumed, |_| {})
            .await
            .unwrap();

        let transfers = |batches: &[Batch]| -> Vec<Vec<ScaledTransfer>> {
            batches.iter().map(|b| b.transfers().clone()).collect()
        };
        assert_eq!(
            transfers(&resumed.batches),
            transfers(&uninterrupted.batches[1..])
        );
    }

    #[tokio::test]
    async fn bad_amount_aborts_at_its_record() {
        let mut input = instructions(5);
        input[3] = instruction("addr3", "three");
        let mut client = RecordingClient::default();

        let err = broadcaster(0, 2)
            .run(input, &mut client, |_| {})
            .await
            .unwrap_err();

        assert_eq!(client.batches.len(), 1);
        match err {
            Error::InvalidAmount {
                index,
                resume_from,
                underlying,
            } => {
                assert_eq!(index, 3);
                assert_eq!(resume_from, 2);
                assert!(matches!(underlying, InvalidAmount::Malformed { .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn skipped_records_are_never_scaled() {
        let mut input = instructions(4);
        input[0] = instruction("addr0", "garbage");
        let mut client = RecordingClient::default();
        broadcaster(1, 10)
            .run(input, &mut client, |_| {})
            .await
            .unwrap();
        assert_eq!(client.submitted_transfers().len(), 3);
    }

    #[tokio::test]
    async fn invalid_config_fails_before_any_submission() {
        let mut client = RecordingClient::default();
        let err = broadcaster(0, 0)
            .run(instructions(3), &mut client, |_| {})
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfig(InvalidConfig::ThresholdMustBePositive)
        ));

        let err = broadcaster(4, 1)
            .run(instructions(3), &mut client, |_| {})
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfig(InvalidConfig::StartIndexOutOfRange { .. })
        ));
        assert!(client.batches.is_empty());
    }
}
