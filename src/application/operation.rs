use crate::domain::client::ClientId;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Open,
    Deposit,
    Withdrawal,
}

/// One row of a batch run: open an account, deposit, or withdraw.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Operation {
    pub r#type: OperationType,
    pub client: ClientId,
    /// Parsed from the field text so no digits are lost.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
}
