use super::account::{Account, AccountNumber};
use super::transaction::Transaction;
use crate::error::{LedgerError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Government-issued identifier. Unique across the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity attributes captured at registration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientProfile {
    #[serde(rename = "client")]
    pub id: ClientId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    profile: ClientProfile,
    accounts: Vec<Account>,
}

impl Client {
    pub fn new(profile: ClientProfile) -> Self {
        Self {
            profile,
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> &ClientId {
        &self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.profile.birth_date
    }

    pub fn address(&self) -> &str {
        &self.profile.address
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Appends `account`. The same account number may be added twice.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Applies `transaction` to the first owned account numbered `number`.
    pub fn apply_transaction(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<()> {
        let client = self.profile.id.clone();
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or(LedgerError::AccountNotFound { client, number })?;
        transaction.apply(account)?;
        Ok(())
    }
}
