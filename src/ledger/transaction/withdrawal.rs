use crate::ledger::{account::Account, error::TransactionError, Decimal};

/// A withdrawal transaction.
///
/// Withdrawals debit the account. Whether a withdrawal is allowed depends on
/// the account kind: checking accounts add a per-withdrawal ceiling and a cap on
/// the number of recorded withdrawals on top of the balance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    amount: Decimal,
}

impl Withdrawal {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub(super) fn apply(&self, account: &mut Account) -> Result<(), TransactionError> {
        account.withdraw(self.amount)
    }
}
