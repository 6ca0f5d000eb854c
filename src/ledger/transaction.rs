mod deposit;
mod withdrawal;

pub use deposit::Deposit;
pub use withdrawal::Withdrawal;

use super::account::Account;
use super::error::TransactionError;
use super::Decimal;

/// Tag recorded in the history for each executed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// A monetary movement against a single account.
///
/// Transactions are not bound to an account: the binding happens when the
/// transaction is registered, and is only visible through that account's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Deposit),
    Withdrawal(Withdrawal),
}

impl Transaction {
    pub fn deposit(amount: Decimal) -> Self {
        Transaction::Deposit(Deposit::new(amount))
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Transaction::Withdrawal(Withdrawal::new(amount))
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(d) => d.amount(),
            Transaction::Withdrawal(w) => w.amount(),
        }
    }

    /// Apply the balance change to `account` without recording it.
    pub fn apply(&self, account: &mut Account) -> Result<(), TransactionError> {
        match self {
            Transaction::Deposit(d) => d.apply(account),
            Transaction::Withdrawal(w) => w.apply(account),
        }
    }

    /// Apply the transaction and, only if the balance changed, append it to the
    /// account's history. A rejected transaction leaves no trace.
    pub fn register(&self, account: &mut Account) -> Result<(), TransactionError> {
        log::trace!("Registering {self} on account {}", account.number());
        self.apply(account)?;
        account.record(self);
        Ok(())
    }
}

impl From<Deposit> for Transaction {
    fn from(deposit: Deposit) -> Self {
        Transaction::Deposit(deposit)
    }
}

impl From<Withdrawal> for Transaction {
    fn from(withdrawal: Withdrawal) -> Self {
        Transaction::Withdrawal(withdrawal)
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transaction::Deposit(d) => write!(f, "[deposit] amount={}", d.amount()),
            Transaction::Withdrawal(w) => write!(f, "[withdrawal] amount={}", w.amount()),
        }
    }
}
