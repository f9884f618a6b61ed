use crate::common::money::Money;

/// One wallet command parsed from a script row and handed to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCommand {
    Open { owner: String, initial: Money },
    Verify,
    Lock,
    Unlock,
    Deposit { amount: Money },
    Pay { amount: Money },
    Refund { amount: Money },
}

impl WalletCommand {
    /// Script name of the command, as it appears in the `op` column.
    pub fn op(&self) -> &'static str {
        match self {
            WalletCommand::Open { .. } => "open",
            WalletCommand::Verify => "verify",
            WalletCommand::Lock => "lock",
            WalletCommand::Unlock => "unlock",
            WalletCommand::Deposit { .. } => "deposit",
            WalletCommand::Pay { .. } => "pay",
            WalletCommand::Refund { .. } => "refund",
        }
    }
}
