use crate::common::{error::WalletError, money::Money};

/// Position of a wallet on the verified/locked axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletStatus {
    UnverifiedUnlocked,
    UnverifiedLocked,
    VerifiedUnlocked,
    VerifiedLocked,
}

impl WalletStatus {
    /// Only a verified, unlocked wallet may pay or refund.
    pub fn is_usable(&self) -> bool {
        matches!(self, WalletStatus::VerifiedUnlocked)
    }
}

/// A single owner's wallet: a balance plus the two flags that gate spending.
///
/// Deposits are accepted in every status. Payments and refunds need the
/// wallet to be verified and unlocked; the check runs before the amount is
/// looked at, and nothing is mutated when it fails.
///
/// Mutators take `&mut self`; the type carries no lock of its own, so a wallet
/// shared between threads must be wrapped by the caller.
///
/// # Examples
/// ```
/// use digital_wallet::common::money::Money;
/// use digital_wallet::domain::wallet::Wallet;
///
/// let mut wallet = Wallet::new("alice", "100".parse().unwrap()).unwrap();
/// wallet.verify();
/// assert!(wallet.pay("30".parse().unwrap()).unwrap());
/// assert_eq!(wallet.balance(), "70".parse::<Money>().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    owner: String,
    balance: Money,
    verified: bool,
    locked: bool,
}

impl Wallet {
    pub fn new(owner: impl Into<String>, initial_balance: Money) -> Result<Self, WalletError> {
        if initial_balance.is_negative() {
            return Err(WalletError::InvalidArgument(
                "initial balance must be >= 0".into(),
            ));
        }
        Ok(Self {
            owner: owner.into(),
            balance: initial_balance,
            verified: false,
            locked: false,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn status(&self) -> WalletStatus {
        match (self.verified, self.locked) {
            (false, false) => WalletStatus::UnverifiedUnlocked,
            (false, true) => WalletStatus::UnverifiedLocked,
            (true, false) => WalletStatus::VerifiedUnlocked,
            (true, true) => WalletStatus::VerifiedLocked,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.status().is_usable()
    }

    /// Marks the wallet verified. There is no way back.
    pub fn verify(&mut self) {
        self.verified = true;
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Credits `amount`. Allowed whether or not the wallet is verified or locked.
    pub fn deposit(&mut self, amount: Money) -> Result<(), WalletError> {
        if !amount.is_positive() {
            return Err(WalletError::InvalidArgument("deposit must be > 0".into()));
        }
        self.credit(amount)
    }

    /// Debits `amount` if the balance covers it.
    ///
    /// Returns `Ok(false)` and leaves the balance alone when funds are
    /// insufficient.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the wallet is unverified or locked, then
    /// `InvalidArgument` if `amount` is not positive.
    pub fn pay(&mut self, amount: Money) -> Result<bool, WalletError> {
        self.ensure_usable()?;
        if !amount.is_positive() {
            return Err(WalletError::InvalidArgument("payment must be > 0".into()));
        }
        if self.balance >= amount {
            self.balance -= amount;
            return Ok(true);
        }
        Ok(false)
    }

    /// Credits `amount` back to a usable wallet.
    pub fn refund(&mut self, amount: Money) -> Result<(), WalletError> {
        self.ensure_usable()?;
        if !amount.is_positive() {
            return Err(WalletError::InvalidArgument("refund must be > 0".into()));
        }
        self.credit(amount)
    }

    fn credit(&mut self, amount: Money) -> Result<(), WalletError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| WalletError::InvalidArgument("amount overflows balance".into()))?;
        Ok(())
    }

    fn ensure_usable(&self) -> Result<(), WalletError> {
        if !self.verified {
            return Err(WalletError::InvalidState("wallet must be verified".into()));
        }
        if self.locked {
            return Err(WalletError::InvalidState("wallet is locked".into()));
        }
        Ok(())
    }
}
