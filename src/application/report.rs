use crate::domain::account::{Account, AccountNumber};
use crate::domain::client::Client;
use crate::domain::history::TransactionRecord;
use crate::domain::money::Balance;
use serde::Serialize;
use std::fmt;

/// One line of the account listing.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AccountSummary {
    pub branch: String,
    pub number: AccountNumber,
    pub holder: String,
    pub balance: Balance,
}

impl AccountSummary {
    pub fn new(client: &Client, account: &Account) -> Self {
        Self {
            branch: account.branch().to_string(),
            number: account.number(),
            holder: client.name().to_string(),
            balance: account.balance(),
        }
    }
}

/// Snapshot of one account's history and balance.
#[derive(Debug, PartialEq, Clone)]
pub struct Statement {
    pub summary: AccountSummary,
    pub records: Vec<TransactionRecord>,
}

impl Statement {
    pub fn new(client: &Client, account: &Account) -> Self {
        Self {
            summary: AccountSummary::new(client, account),
            records: account.history().filtered(None).cloned().collect(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================ STATEMENT ================")?;
        writeln!(
            f,
            "Branch: {}  Account: {}  Holder: {}",
            self.summary.branch, self.summary.number, self.summary.holder
        )?;
        if self.records.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }
        for record in &self.records {
            writeln!(f, "{}: R$ {}", record.kind, record.amount)?;
        }
        writeln!(f, "Balance: R$ {}", self.summary.balance)?;
        write!(f, "===========================================")
    }
}
