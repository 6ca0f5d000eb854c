use crate::ledger::{account::Account, error::TransactionError, Decimal};

/// A deposit transaction.
///
/// Deposits credit the account. The amount is not validated on construction:
/// the account rejects non-positive amounts when the deposit is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deposit {
    amount: Decimal,
}

impl Deposit {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub(super) fn apply(&self, account: &mut Account) -> Result<(), TransactionError> {
        account.deposit(self.amount)
    }
}
