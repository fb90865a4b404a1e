use crate::domain::client::ClientId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a deposit or withdrawal is refused by an account.
///
/// Every variant is recoverable: the account is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransactionError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Withdrawal of {amount} exceeds the per-withdrawal ceiling of {ceiling}")]
    WithdrawalCeilingExceeded { amount: Decimal, ceiling: Decimal },
    #[error("Maximum number of withdrawals ({max}) reached")]
    WithdrawalCountExceeded { max: u32 },
    #[error("Deposit of {amount} would overflow the balance")]
    BalanceOverflow { amount: Decimal },
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),
    #[error("A client with id {0} already exists")]
    DuplicateClient(ClientId),
    #[error("Client {0} has no account")]
    NoAccount(ClientId),
    #[error("Account {number} does not belong to client {client}")]
    AccountNotFound { client: ClientId, number: u32 },
    #[error("{0} operation is missing an amount")]
    MissingAmount(&'static str),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
