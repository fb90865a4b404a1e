use crate::error::TransactionError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

/// A positive, non-zero monetary amount.
///
/// `Amount::new` is the one validity rule shared by every balance-mutating
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, TransactionError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(TransactionError::InvalidAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_money(self.0))
    }
}

/// Running account balance. Starts at zero and only moves by valid amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Balance(Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[cfg(test)]
    pub(crate) fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` when `amount` can be taken out without going negative.
    pub fn covers(&self, amount: Decimal) -> bool {
        amount <= self.0
    }
}

impl Balance {
    /// `None` when the sum does not fit in a `Decimal`.
    pub fn checked_add(self, amount: Amount) -> Option<Self> {
        self.0.checked_add(amount.0).map(Self)
    }

    /// `None` when `amount` is larger than the balance.
    pub fn checked_sub(self, amount: Amount) -> Option<Self> {
        if self.covers(amount.0) {
            self.0.checked_sub(amount.0).map(Self)
        } else {
            None
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_money(self.0))
    }
}

impl Serialize for Balance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_money(self.0))
    }
}

/// Two-decimal display used for every amount shown to a user.
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
