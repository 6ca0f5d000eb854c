//! A minimal retail-banking ledger.
//!
//! Customers own checking accounts; deposits and withdrawals are validated
//! against the account rules and, when accepted, recorded in the account's
//! history. All state lives in memory for the lifetime of the process.

mod ledger;

pub use ledger::*;
