use crate::prelude::*;

/// One row of the input table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
pub struct Record {
    #[getset(get = "pub")]
    #[builder(into)]
    recipient: String,

    #[getset(get = "pub")]
    #[builder(into)]
    amount: String,
}

impl Record {
    pub fn into_instruction(self, denom: impl Into<String>) -> TransferInstruction {
        TransferInstruction::builder()
            .recipient(self.recipient)
            .amount(self.amount)
            .denom(denom)
            .build()
    }
}

/// A transfer as supplied by the input, amount still in display units.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
pub struct TransferInstruction {
    #[getset(get = "pub")]
    #[builder(into)]
    recipient: String,

    /// Decimal string, e.g. `"12.5"`.
    #[getset(get = "pub")]
    #[builder(into)]
    amount: String,

    #[getset(get = "pub")]
    #[builder(into)]
    denom: String,
}

impl TransferInstruction {
    /// Converts the amount into base units, see [`scale_amount`].
    pub fn scale(self) -> Result<ScaledTransfer, InvalidAmount> {
        let base_amount = scale_amount(&self.amount)?;
        Ok(ScaledTransfer::builder()
            .recipient(self.recipient)
            .base_amount(base_amount)
            .denom(self.denom)
            .build())
    }
}
