use crate::ledger::account::AccountNumber;
use crate::ledger::operation::OperationRecord;
use crate::ledger::Decimal;

/// Top-level error type for the ledger.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),
}

/// Errors during `OperationRecord` -> `Operation` conversion (hard errors).
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(OperationRecord),

    #[error("Invalid birth date {value:?} for customer {tax_id} (expected dd-mm-YYYY)")]
    InvalidBirthDate { tax_id: String, value: String },
}

/// A monetary operation was rejected before touching the account.
/// Balance and history are unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    #[error("Invalid amount {amount}: must be greater than zero")]
    InvalidAmount { amount: Decimal },

    #[error("Insufficient funds: account {account} has {balance}, requested {requested}")]
    InsufficientFunds {
        account: AccountNumber,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("Withdrawal limit exceeded: account {account} allows {limit} per withdrawal, requested {requested}")]
    WithdrawalLimitExceeded {
        account: AccountNumber,
        limit: Decimal,
        requested: Decimal,
    },

    #[error("Withdrawal count exceeded: account {account} allows at most {max} withdrawals")]
    WithdrawalCountExceeded { account: AccountNumber, max: usize },

    #[error("Balance overflow: account {account} has {balance}, requested {requested}")]
    BalanceOverflow {
        account: AccountNumber,
        balance: Decimal,
        requested: Decimal,
    },
}

/// Soft (customer-facing) errors during registry operations.
/// These don't stop batch processing, we log and continue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessingError {
    #[error("A customer with tax id {tax_id} already exists")]
    DuplicateTaxId { tax_id: String },

    #[error("Customer {tax_id} not found")]
    CustomerNotFound { tax_id: String },

    #[error("Customer {tax_id} has no account")]
    NoAccount { tax_id: String },

    #[error("Account {account} not found")]
    AccountNotFound { account: AccountNumber },

    #[error("No customer ids left to assign")]
    CustomerIdsExhausted,

    #[error("No account numbers left to assign")]
    AccountNumbersExhausted,

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}
