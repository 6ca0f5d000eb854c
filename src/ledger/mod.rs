//! Ledger module.
//!
//! This module contains the core banking logic including:
//! - `Bank` - The in-memory registry of customers and accounts
//! - `Customer` - Account holders and the entry point for transactions
//! - `Account` - Balance, history and the standard/checking withdrawal rules
//! - `Transaction` types - Deposit and Withdrawal
//! - `History` - The append-only per-account transaction log
//! - `Error` types - Validation, registry and input errors

mod account;
mod bank;
mod customer;
mod error;
mod history;
mod operation;
mod transaction;

pub use rust_decimal::Decimal;

pub use account::{Account, AccountKind, AccountNumber, CheckingLimits, DEFAULT_BRANCH_CODE};
pub use bank::{Bank, BankConfig};
pub use customer::{Customer, CustomerId, Person};
pub use error::{Error, OperationError, ProcessingError, TransactionError};
pub use history::{History, HistoryEntry};
pub use operation::{Operation, OperationRecord, OperationType, BIRTH_DATE_FORMAT};
pub use transaction::{Deposit, Transaction, TransactionKind, Withdrawal};
