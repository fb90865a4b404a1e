use super::account::Account;
use super::history::TransactionKind;
use crate::error::TransactionError;
use rust_decimal::Decimal;

/// A balance-affecting request. Only its effect is kept, as a history record.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Transaction {
    Deposit(Decimal),
    Withdrawal(Decimal),
}

impl Transaction {
    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    /// Mutates `account` and, only if that succeeded, appends the record.
    ///
    /// Both steps happen under the same `&mut` borrow, so nothing can observe
    /// the new balance without its record.
    pub fn apply(&self, account: &mut Account) -> Result<(), TransactionError> {
        let applied = match self {
            Transaction::Deposit(amount) => account.deposit(*amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(*amount)?,
        };
        account.history_mut().record(self.kind(), applied);
        Ok(())
    }
}
