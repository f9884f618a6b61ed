/// Failures raised by [`Wallet`](crate::domain::wallet::Wallet) operations.
///
/// Insufficient funds on `pay` is not represented here: it is a normal
/// `Ok(false)` outcome.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing input csv path. usage: cargo run -- <script.csv>")]
    MissingArg,
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("process error: {0}")]
    Process(String),
    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),
}
