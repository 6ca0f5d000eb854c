use super::customer::CustomerId;
use super::error::TransactionError;
use super::history::History;
use super::transaction::{Transaction, TransactionKind};
use super::Decimal;

pub type AccountNumber = u32;

/// Branch every account is opened in.
pub const DEFAULT_BRANCH_CODE: &str = "0001";

/// Per-account withdrawal rules of a checking account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingLimits {
    /// Maximum amount allowed in a single withdrawal
    pub withdrawal_limit: Decimal,
    /// Maximum number of withdrawals ever recorded on the account.
    /// Counted over the whole history, it does not reset per day.
    pub max_daily_withdrawals: usize,
}

impl Default for CheckingLimits {
    fn default() -> Self {
        Self {
            withdrawal_limit: Decimal::from(500),
            max_daily_withdrawals: 3,
        }
    }
}

/// Account variant, selecting the withdrawal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Withdrawals only need a positive amount covered by the balance
    Standard,
    Checking(CheckingLimits),
}

/// A customer account: a balance plus the history of what changed it.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    branch_code: &'static str,
    owner: CustomerId,
    balance: Decimal,
    history: History,
    kind: AccountKind,
}

impl Account {
    /// Open a standard account with a zero balance and an empty history.
    pub fn open(owner: CustomerId, number: AccountNumber) -> Self {
        Self::with_kind(owner, number, AccountKind::Standard)
    }

    /// Open a checking account with the given withdrawal rules.
    pub fn open_checking(owner: CustomerId, number: AccountNumber, limits: CheckingLimits) -> Self {
        Self::with_kind(owner, number, AccountKind::Checking(limits))
    }

    fn with_kind(owner: CustomerId, number: AccountNumber, kind: AccountKind) -> Self {
        Self {
            number,
            branch_code: DEFAULT_BRANCH_CODE,
            owner,
            balance: Decimal::ZERO,
            history: History::new(),
            kind,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch_code(&self) -> &str {
        self.branch_code
    }

    /// The customer the account was opened for
    pub fn owner(&self) -> CustomerId {
        self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Number of withdrawals recorded in the history
    pub fn withdrawal_count(&self) -> usize {
        self.history.count(TransactionKind::Withdrawal)
    }

    /// Credit the account. Fails without side effects unless `amount > 0`
    /// and the new balance is representable.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount { amount });
        }

        let balance = self.balance.checked_add(amount).ok_or(
            TransactionError::BalanceOverflow {
                account: self.number,
                balance: self.balance,
                requested: amount,
            },
        )?;
        self.balance = balance.normalize();
        log::trace!(
            "[deposit] account={} amount={} -> new_balance={}",
            self.number,
            amount,
            self.balance
        );
        Ok(())
    }

    /// Debit the account, applying the rules of its kind.
    ///
    /// Checking accounts test, in order and stopping at the first failure:
    /// the per-withdrawal limit, the number of recorded withdrawals, then the
    /// standard balance and amount checks.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        if let AccountKind::Checking(limits) = self.kind {
            let withdrawals = self.withdrawal_count();

            if amount > limits.withdrawal_limit {
                return Err(TransactionError::WithdrawalLimitExceeded {
                    account: self.number,
                    limit: limits.withdrawal_limit,
                    requested: amount,
                });
            }

            if withdrawals >= limits.max_daily_withdrawals {
                return Err(TransactionError::WithdrawalCountExceeded {
                    account: self.number,
                    max: limits.max_daily_withdrawals,
                });
            }
        }

        self.withdraw_from_balance(amount)
    }

    fn withdraw_from_balance(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        if amount > self.balance {
            return Err(TransactionError::InsufficientFunds {
                account: self.number,
                balance: self.balance,
                requested: amount,
            });
        }

        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount { amount });
        }

        let balance = self.balance.checked_sub(amount).ok_or(
            TransactionError::BalanceOverflow {
                account: self.number,
                balance: self.balance,
                requested: amount,
            },
        )?;
        self.balance = balance.normalize();
        debug_assert!(self.balance >= Decimal::ZERO, "balance went negative");
        log::trace!(
            "[withdrawal] account={} amount={} -> new_balance={}",
            self.number,
            amount,
            self.balance
        );
        Ok(())
    }

    /// Append a transaction that was just applied to this account.
    pub(super) fn record(&mut self, transaction: &Transaction) {
        self.history.append(transaction);
    }
}
