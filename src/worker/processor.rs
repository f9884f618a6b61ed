use crate::{
    common::{
        command::WalletCommand,
        error::{AppError, WalletError},
        money::Money,
    },
    domain::wallet::Wallet,
};

/// What happened to one replayed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// `pay` found insufficient funds; nothing moved.
    Declined,
    /// The wallet refused the command; the replay carries on.
    Rejected(WalletError),
}

/// Replays commands against the single wallet opened by the script.
#[derive(Debug, Default)]
pub struct Processor {
    wallet: Option<Wallet>,
}

impl Processor {
    pub fn new() -> Self {
        Self { wallet: None }
    }

    pub fn wallet(&self) -> Option<&Wallet> {
        self.wallet.as_ref()
    }

    /// Applies one command.
    ///
    /// Errors are reserved for script mistakes (a second `open`, anything
    /// before `open`, an invalid opening balance). Refusals from the wallet
    /// itself come back as [`Outcome::Rejected`].
    pub fn process(&mut self, command: WalletCommand) -> Result<Outcome, AppError> {
        let op = command.op();

        let result = match command {
            WalletCommand::Open { owner, initial } => return self.open(owner, initial),
            WalletCommand::Verify => {
                self.wallet_mut(op)?.verify();
                Ok(Outcome::Applied)
            }
            WalletCommand::Lock => {
                self.wallet_mut(op)?.lock();
                Ok(Outcome::Applied)
            }
            WalletCommand::Unlock => {
                self.wallet_mut(op)?.unlock();
                Ok(Outcome::Applied)
            }
            WalletCommand::Deposit { amount } => self
                .wallet_mut(op)?
                .deposit(amount)
                .map(|()| Outcome::Applied),
            WalletCommand::Pay { amount } => self.wallet_mut(op)?.pay(amount).map(|paid| {
                if paid {
                    Outcome::Applied
                } else {
                    Outcome::Declined
                }
            }),
            WalletCommand::Refund { amount } => self
                .wallet_mut(op)?
                .refund(amount)
                .map(|()| Outcome::Applied),
        };

        let outcome = result.unwrap_or_else(Outcome::Rejected);
        self.trace_outcome(op, &outcome);
        Ok(outcome)
    }

    fn open(&mut self, owner: String, initial: Money) -> Result<Outcome, AppError> {
        if let Some(existing) = &self.wallet {
            return Err(AppError::Process(format!(
                "wallet for {} is already open",
                existing.owner()
            )));
        }
        let wallet = Wallet::new(owner, initial)?;
        tracing::info!(owner = %wallet.owner(), balance = %wallet.balance(), "wallet opened");
        self.wallet = Some(wallet);
        Ok(Outcome::Applied)
    }

    fn wallet_mut(&mut self, op: &str) -> Result<&mut Wallet, AppError> {
        self.wallet
            .as_mut()
            .ok_or_else(|| AppError::Process(format!("{op} before open")))
    }

    fn trace_outcome(&self, op: &str, outcome: &Outcome) {
        let Some(wallet) = &self.wallet else {
            return;
        };
        match outcome {
            Outcome::Applied => {
                tracing::debug!(op, balance = %wallet.balance(), status = ?wallet.status(), "applied")
            }
            Outcome::Declined => {
                tracing::info!(op, balance = %wallet.balance(), "declined: insufficient funds")
            }
            Outcome::Rejected(err) => tracing::warn!(op, error = %err, "rejected"),
        }
    }
}
