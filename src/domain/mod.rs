//! Core ledger model: money, accounts, history, transactions and clients.
//!
//! Nothing here performs I/O or holds process-wide state.

pub mod account;
pub mod client;
pub mod history;
pub mod money;
pub mod ports;
pub mod transaction;
