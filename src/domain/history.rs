use super::money::Amount;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single successful balance-affecting operation.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of the operations applied to one account.
///
/// Records are never mutated or removed once written.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record stamped with the current time.
    ///
    /// The caller guarantees the operation has already been applied.
    pub fn record(&mut self, kind: TransactionKind, amount: Amount) {
        self.records.push(TransactionRecord {
            kind,
            amount,
            timestamp: Utc::now(),
        });
    }

    /// Yields records in insertion order, keeping only those whose kind
    /// matches `kind` case-insensitively. `None` yields everything.
    ///
    /// Each call starts a fresh traversal.
    pub fn filtered<'a>(
        &'a self,
        kind: Option<&'a str>,
    ) -> impl Iterator<Item = &'a TransactionRecord> + 'a {
        self.records.iter().filter(move |record| match kind {
            Some(kind) => record.kind.as_str().eq_ignore_ascii_case(kind),
            None => true,
        })
    }

    /// Records whose timestamp falls on `day` (UTC).
    pub fn on_day(&self, day: NaiveDate) -> impl Iterator<Item = &TransactionRecord> + '_ {
        self.records
            .iter()
            .filter(move |record| record.timestamp.date_naive() == day)
    }

    pub fn count(&self, kind: TransactionKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
