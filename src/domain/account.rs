use super::client::{Client, ClientId};
use super::history::{History, TransactionKind};
use super::money::{Amount, Balance};
use crate::error::TransactionError;
use rust_decimal::Decimal;

/// Branch shared by every account in the ledger.
pub const BRANCH: &str = "0001";

pub type AccountNumber = u32;

/// Extra withdrawal rules carried by a current account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithdrawalPolicy {
    /// Largest amount a single withdrawal may take.
    pub ceiling: Decimal,
    /// Withdrawals allowed over the lifetime of the account.
    pub max_withdrawals: u32,
}

impl WithdrawalPolicy {
    /// Checks the policy ahead of the balance rule: ceiling first, then count.
    fn check(&self, amount: Decimal, prior_withdrawals: usize) -> Result<(), TransactionError> {
        if amount > self.ceiling {
            return Err(TransactionError::WithdrawalCeilingExceeded {
                amount,
                ceiling: self.ceiling,
            });
        }
        if prior_withdrawals >= self.max_withdrawals as usize {
            return Err(TransactionError::WithdrawalCountExceeded {
                max: self.max_withdrawals,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountKind {
    Basic,
    Current(WithdrawalPolicy),
}

/// An account owned by a client.
///
/// Holds the balance and the history of successful operations. The client
/// is referenced by id only; the account never controls its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    branch: &'static str,
    balance: Balance,
    history: History,
    client: ClientId,
    kind: AccountKind,
}

impl Account {
    pub fn new(client: &Client, number: AccountNumber) -> Self {
        Self::with_kind(client, number, AccountKind::Basic)
    }

    /// Creates a current account with a per-withdrawal ceiling and a
    /// lifetime cap on the number of withdrawals.
    pub fn new_current(
        client: &Client,
        number: AccountNumber,
        ceiling: Decimal,
        max_withdrawals: u32,
    ) -> Self {
        Self::with_kind(
            client,
            number,
            AccountKind::Current(WithdrawalPolicy {
                ceiling,
                max_withdrawals,
            }),
        )
    }

    fn with_kind(client: &Client, number: AccountNumber, kind: AccountKind) -> Self {
        Self {
            number,
            branch: BRANCH,
            balance: Balance::ZERO,
            history: History::new(),
            client: client.id().clone(),
            kind,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        self.branch
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn client(&self) -> &ClientId {
        &self.client
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Transactions append their own record once the mutation succeeded.
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Credits `amount` and returns it as a validated [`Amount`].
    ///
    /// Does not touch the history.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Amount, TransactionError> {
        let amount = Amount::new(amount)?;
        self.balance = self.balance.checked_add(amount).ok_or(
            TransactionError::BalanceOverflow {
                amount: amount.value(),
            },
        )?;
        Ok(amount)
    }

    /// Debits `amount` after running the current-account policy, if any.
    ///
    /// Does not touch the history.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Amount, TransactionError> {
        if let AccountKind::Current(policy) = self.kind {
            let prior = self.history.count(TransactionKind::Withdrawal);
            policy.check(amount, prior)?;
        }
        self.withdraw_from_balance(amount)
    }

    fn withdraw_from_balance(&mut self, amount: Decimal) -> Result<Amount, TransactionError> {
        if !self.balance.covers(amount) {
            return Err(TransactionError::InsufficientFunds {
                requested: amount,
                available: self.balance.value(),
            });
        }
        let amount = Amount::new(amount)?;
        self.balance = self.balance.checked_sub(amount).ok_or(
            TransactionError::InsufficientFunds {
                requested: amount.value(),
                available: self.balance.value(),
            },
        )?;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::ClientProfile;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn client() -> Client {
        Client::new(ClientProfile {
            id: ClientId::new("12345678900"),
            name: "Ana Souza".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            address: "Rua A, 10 - Centro - Recife/PE".to_string(),
        })
    }

    #[test]
    fn test_new_account_is_empty() {
        let owner = client();
        let account = Account::new(&owner, 7);
        assert_eq!(account.number(), 7);
        assert_eq!(account.branch(), "0001");
        assert_eq!(account.balance(), Balance::ZERO);
        assert_eq!(account.client(), owner.id());
        assert!(account.history().is_empty());
        assert_eq!(account.kind(), AccountKind::Basic);
    }

    #[test]
    fn test_deposit() {
        let mut account = Account::new(&client(), 1);
        let credited = account.deposit(dec!(10.5)).unwrap();
        assert_eq!(credited.value(), dec!(10.5));
        assert_eq!(account.balance(), Balance::new(dec!(10.5)));
        // The account itself never records history.
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = Account::new(&client(), 1);
        assert_eq!(
            account.deposit(dec!(0)),
            Err(TransactionError::InvalidAmount(dec!(0)))
        );
        assert_eq!(
            account.deposit(dec!(-5)),
            Err(TransactionError::InvalidAmount(dec!(-5)))
        );
        assert_eq!(account.balance(), Balance::ZERO);
    }

    #[test]
    fn test_deposit_overflow_leaves_balance_unchanged() {
        let mut account = Account::new(&client(), 1);
        account.deposit(Decimal::MAX).unwrap();

        assert_eq!(
            account.deposit(Decimal::MAX),
            Err(TransactionError::BalanceOverflow {
                amount: Decimal::MAX
            })
        );
        assert_eq!(account.balance().value(), Decimal::MAX);
    }

    #[test]
    fn test_withdraw_success() {
        let mut account = Account::new(&client(), 1);
        account.deposit(dec!(10)).unwrap();
        account.withdraw(dec!(4)).unwrap();
        assert_eq!(account.balance(), Balance::new(dec!(6)));
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let mut account = Account::new(&client(), 1);
        account.deposit(dec!(10)).unwrap();
        account.withdraw(dec!(10)).unwrap();
        assert_eq!(account.balance(), Balance::ZERO);
    }

    #[test]
    fn test_withdraw_insufficient() {
        let mut account = Account::new(&client(), 1);
        account.deposit(dec!(10)).unwrap();
        assert_eq!(
            account.withdraw(dec!(20)),
            Err(TransactionError::InsufficientFunds {
                requested: dec!(20),
                available: dec!(10),
            })
        );
        assert_eq!(account.balance(), Balance::new(dec!(10)));
    }

    #[test]
    fn test_withdraw_checks_funds_before_validity() {
        let mut account = Account::new(&client(), 1);
        assert_eq!(
            account.withdraw(dec!(0)),
            Err(TransactionError::InvalidAmount(dec!(0)))
        );
        assert_eq!(
            account.withdraw(dec!(-1)),
            Err(TransactionError::InvalidAmount(dec!(-1)))
        );
        assert!(matches!(
            account.withdraw(dec!(1)),
            Err(TransactionError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn test_current_account_ceiling_precedes_count() {
        let mut account = Account::new_current(&client(), 1, dec!(500), 0);
        account.deposit(dec!(1000)).unwrap();
        assert_eq!(
            account.withdraw(dec!(600)),
            Err(TransactionError::WithdrawalCeilingExceeded {
                amount: dec!(600),
                ceiling: dec!(500),
            })
        );
        assert_eq!(
            account.withdraw(dec!(100)),
            Err(TransactionError::WithdrawalCountExceeded { max: 0 })
        );
        assert_eq!(account.balance(), Balance::new(dec!(1000)));
    }

    #[test]
    fn test_current_account_count_precedes_balance() {
        let owner = client();
        let mut account = Account::new_current(&owner, 1, dec!(500), 1);
        account.deposit(dec!(5)).unwrap();
        let taken = account.withdraw(dec!(5)).unwrap();
        account.history_mut().record(TransactionKind::Withdrawal, taken);

        // Balance is zero too, but the count rule reports first.
        assert_eq!(
            account.withdraw(dec!(10)),
            Err(TransactionError::WithdrawalCountExceeded { max: 1 })
        );
    }

    #[test]
    fn test_current_account_ceiling_is_inclusive() {
        let mut account = Account::new_current(&client(), 1, dec!(500), 3);
        account.deposit(dec!(500)).unwrap();
        assert!(account.withdraw(dec!(500)).is_ok());
    }
}
