use crate::prelude::*;

use std::io::Write;

/// Prints each batch as one JSON line instead of broadcasting it.
#[derive(Debug, Getters)]
pub struct DryRunClient<W> {
    out: W,

    #[getset(get = "pub")]
    rendered: usize,
}

impl<W: Write> DryRunClient<W> {
    pub fn new(out: W) -> Self {
        Self { out, rendered: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LedgerClient for DryRunClient<W> {
    async fn submit(&mut self, batch: &Batch) -> Result<(), SubmitError> {
        let render_failed = |underlying: String| SubmitError::RenderFailed { underlying };
        let line = serde_json::to_string(batch).map_err(|e| render_failed(e.to_string()))?;
        writeln!(self.out, "{line}").map_err(|e| render_failed(e.to_string()))?;
        self.rendered += 1;
        Ok(())
    }
}
