use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Settings applied to every current account the bank opens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Largest amount a single withdrawal may take.
    pub withdrawal_ceiling: Decimal,
    /// Withdrawals allowed over an account's lifetime.
    pub max_withdrawals: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            withdrawal_ceiling: dec!(500),
            max_withdrawals: 50,
        }
    }
}

impl LedgerConfig {
    /// Loads a JSON config file. Missing fields keep their defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
