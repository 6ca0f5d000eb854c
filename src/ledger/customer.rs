use chrono::NaiveDate;

use super::account::{Account, AccountNumber};
use super::error::TransactionError;
use super::transaction::Transaction;

/// Registry-assigned customer identifier. Accounts refer back to their owner
/// through it instead of holding the customer itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub u32);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Personal details of an individual customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub birth_date: NaiveDate,
    /// Unique across the registry, used to look customers up
    pub tax_id: String,
}

#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    address: String,
    person: Option<Person>,
    accounts: Vec<AccountNumber>,
}

impl Customer {
    pub fn new(id: CustomerId, address: impl Into<String>) -> Self {
        Self {
            id,
            address: address.into(),
            person: None,
            accounts: Vec::new(),
        }
    }

    pub fn individual(id: CustomerId, person: Person, address: impl Into<String>) -> Self {
        Self {
            person: Some(person),
            ..Self::new(id, address)
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn person(&self) -> Option<&Person> {
        self.person.as_ref()
    }

    pub fn tax_id(&self) -> Option<&str> {
        self.person.as_ref().map(|p| p.tax_id.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.person.as_ref().map(|p| p.name.as_str())
    }

    /// Numbers of the accounts added to this customer, in the order they were added
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    /// Add an account to the customer. Duplicates are not filtered.
    pub fn add_account(&mut self, account: &Account) {
        self.accounts.push(account.number());
    }

    /// Execute `transaction` against `account`.
    ///
    /// The account is not checked against the customer's own accounts: any
    /// account handed in is operated on.
    pub fn execute_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), TransactionError> {
        log::trace!(
            "Customer {} executing {transaction} on account {}",
            self.id,
            account.number()
        );
        transaction.register(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn alice() -> Customer {
        let person = Person {
            name: "Alice".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            tax_id: "111".to_string(),
        };
        Customer::individual(CustomerId(1), person, "1 Main St")
    }

    #[test]
    fn test_individual_exposes_person() {
        let customer = alice();
        assert_eq!(customer.id(), CustomerId(1));
        assert_eq!(customer.address(), "1 Main St");
        assert_eq!(customer.tax_id(), Some("111"));
        assert_eq!(customer.name(), Some("Alice"));
        assert!(customer.accounts().is_empty());
    }

    #[test]
    fn test_plain_customer_has_no_person() {
        let customer = Customer::new(CustomerId(2), "Somewhere");
        assert!(customer.person().is_none());
        assert!(customer.tax_id().is_none());
    }

    #[test]
    fn test_add_account_keeps_order_and_duplicates() {
        let mut customer = alice();
        let first = Account::open(customer.id(), 1);
        let second = Account::open(customer.id(), 2);
        customer.add_account(&first);
        customer.add_account(&second);
        customer.add_account(&first);

        assert_eq!(customer.accounts(), &[1, 2, 1]);
    }

    #[test]
    fn test_execute_transaction_records_history() {
        let mut customer = alice();
        let mut account = Account::open(customer.id(), 1);
        customer.add_account(&account);

        customer
            .execute_transaction(&mut account, &Transaction::deposit(dec!(250)))
            .unwrap();

        assert_eq!(account.balance(), dec!(250));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_execute_transaction_failure_has_no_side_effects() {
        let customer = alice();
        let mut account = Account::open(customer.id(), 1);

        let result = customer.execute_transaction(&mut account, &Transaction::withdrawal(dec!(1)));

        assert!(result.is_err());
        assert_eq!(account.balance(), dec!(0));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_execute_transaction_on_foreign_account_is_allowed() {
        let customer = alice();
        let mut foreign = Account::open(CustomerId(99), 5);

        customer
            .execute_transaction(&mut foreign, &Transaction::deposit(dec!(10)))
            .unwrap();

        assert_eq!(foreign.balance(), dec!(10));
        assert_eq!(foreign.owner(), CustomerId(99));
        assert!(!customer.accounts().contains(&5));
    }
}
