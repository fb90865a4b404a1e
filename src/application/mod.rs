//! Application layer orchestrating the domain model.
//!
//! `Bank` replaces the global client and account lists of an interactive
//! front end with an explicit context object, so the ledger can be driven by
//! batch input or by tests alike.

pub mod bank;
pub mod operation;
pub mod report;
