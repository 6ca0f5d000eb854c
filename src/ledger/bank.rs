use std::collections::HashMap;
use std::io::{Read, Write};

use serde::{Serialize, Serializer};

use super::account::{Account, AccountNumber, CheckingLimits};
use super::customer::{Customer, CustomerId, Person};
use super::error::{Error, ProcessingError};
use super::operation::{Operation, OperationRecord};
use super::transaction::Transaction;
use super::Decimal;

/// Registry settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BankConfig {
    /// Rules given to every checking account opened by the registry
    pub checking: CheckingLimits,
}

/// In-memory registry of customers and accounts.
///
/// Owns every customer and account for the lifetime of the process. Customers
/// are found by tax id, accounts by their sequential number.
#[derive(Debug, Default)]
pub struct Bank {
    config: BankConfig,
    /// Indexed by `CustomerId`
    customers: Vec<Customer>,
    /// Account number `n` lives at index `n - 1`
    accounts: Vec<Account>,
    /// Maps tax id to customer
    tax_ids: HashMap<String, CustomerId>,
}

impl Bank {
    /// Create an empty `Bank` with the default checking limits
    pub fn new() -> Self {
        Self::with_config(BankConfig::default())
    }

    pub fn with_config(config: BankConfig) -> Self {
        log::trace!("Bank initialized with {config:?}");
        Self {
            config,
            customers: Vec::new(),
            accounts: Vec::new(),
            tax_ids: HashMap::new(),
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Register an individual customer. Tax ids are unique.
    pub fn create_customer(
        &mut self,
        person: Person,
        address: impl Into<String>,
    ) -> Result<CustomerId, ProcessingError> {
        if self.tax_ids.contains_key(&person.tax_id) {
            return Err(ProcessingError::DuplicateTaxId {
                tax_id: person.tax_id,
            });
        }

        let id = next_id(self.customers.len())
            .map(CustomerId)
            .ok_or(ProcessingError::CustomerIdsExhausted)?;
        log::debug!("[customer] Created customer {id} (tax_id {})", person.tax_id);
        self.tax_ids.insert(person.tax_id.clone(), id);
        self.customers.push(Customer::individual(id, person, address));
        Ok(id)
    }

    pub fn find_customer(&self, tax_id: &str) -> Option<&Customer> {
        self.tax_ids.get(tax_id).and_then(|&id| self.customer(id))
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(index_of(id.0)?)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Open a checking account for the customer with `tax_id`.
    /// Accounts are numbered sequentially from 1, across all customers.
    pub fn open_account(&mut self, tax_id: &str) -> Result<AccountNumber, ProcessingError> {
        let id = self.customer_id(tax_id)?;
        let number =
            next_id(self.accounts.len()).ok_or(ProcessingError::AccountNumbersExhausted)?;
        let account = Account::open_checking(id, number, self.config.checking);

        let customer = index_of(id.0)
            .and_then(|i| self.customers.get_mut(i))
            .ok_or_else(|| not_found(tax_id))?;
        customer.add_account(&account);
        self.accounts.push(account);

        log::debug!("[account] Opened account {number} for customer {id} (tax_id {tax_id})");
        Ok(number)
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(index_of(number)?)
    }

    /// All accounts, in opening order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The customer an account was opened for
    pub fn holder(&self, account: &Account) -> Option<&Customer> {
        self.customer(account.owner())
    }

    /// The first account added to the customer with `tax_id`
    pub fn primary_account(&self, tax_id: &str) -> Result<&Account, ProcessingError> {
        let number = self.primary_account_number(tax_id)?;
        self.account(number)
            .ok_or(ProcessingError::AccountNotFound { account: number })
    }

    /// Deposit into the customer's primary account
    pub fn deposit(&mut self, tax_id: &str, amount: Decimal) -> Result<(), ProcessingError> {
        let number = self.primary_account_number(tax_id)?;
        self.execute(tax_id, number, &Transaction::deposit(amount))
    }

    /// Withdraw from the customer's primary account
    pub fn withdraw(&mut self, tax_id: &str, amount: Decimal) -> Result<(), ProcessingError> {
        let number = self.primary_account_number(tax_id)?;
        self.execute(tax_id, number, &Transaction::withdrawal(amount))
    }

    /// Have the customer with `tax_id` execute `transaction` on account `number`.
    ///
    /// The account does not need to belong to the customer.
    pub fn execute(
        &mut self,
        tax_id: &str,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<(), ProcessingError> {
        let id = self.customer_id(tax_id)?;
        let customer = index_of(id.0)
            .and_then(|i| self.customers.get(i))
            .ok_or_else(|| not_found(tax_id))?;
        let account = index_of(number)
            .and_then(|i| self.accounts.get_mut(i))
            .ok_or(ProcessingError::AccountNotFound { account: number })?;

        if account.owner() != id {
            log::debug!(
                "Customer {id} operating on account {number} owned by customer {}",
                account.owner()
            );
        }

        customer.execute_transaction(account, transaction)?;
        Ok(())
    }

    /// Run a single well-formed operation
    pub fn apply(&mut self, operation: Operation) -> Result<(), ProcessingError> {
        match operation {
            Operation::CreateCustomer { person, address } => {
                self.create_customer(person, address).map(|_| ())
            }
            Operation::OpenAccount { tax_id } => self.open_account(&tax_id).map(|_| ()),
            Operation::Deposit { tax_id, amount } => self.deposit(&tax_id, amount),
            Operation::Withdrawal { tax_id, amount } => self.withdraw(&tax_id, amount),
        }
    }

    /// Primary API: Process operations from any source (File, `TcpStream`, etc.)
    /// Note that the CSV reader is buffered automatically, so you should not wrap rdr in a buffered reader like `io::BufReader`.
    pub fn process_operations<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        log::info!("Starting operation processing");

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut processed = 0u64;
        let mut skipped = 0u64;

        for result in csv_reader.deserialize() {
            // Step 1: Parse CSV row into raw OperationRecord
            let record: OperationRecord = result?;

            let row_num = processed + skipped + 1;
            log::trace!("[row {row_num}] Parsing: {record}");

            // Step 2: Convert into a well-formed Operation
            let operation = Operation::try_from(record)?;

            // Step 3: Run it, rejections are expected and only skip the row
            let tax_id = operation.tax_id().to_string();
            if let Err(e) = self.apply(operation) {
                log::warn!("[row {row_num}] - Skipped (tax_id {tax_id}): {e}");
                skipped += 1;
            } else {
                processed += 1;
            }
        }

        log::info!(
            "Processing complete: {} processed, {} skipped, {} customers, {} accounts",
            processed,
            skipped,
            self.customers.len(),
            self.accounts.len()
        );
        Ok(())
    }

    /// Secondary API: Write one summary row per account to any sink, in opening order.
    /// Note that the CSV writer is buffered automatically, so you should not wrap wtr in a buffered writer like `io::BufWriter`.
    pub fn export_accounts<W: Write>(&self, writer: W) -> Result<(), Error> {
        log::info!("Exporting {} accounts", self.accounts.len());

        let mut csv_writer = csv::Writer::from_writer(writer);
        for account in &self.accounts {
            csv_writer.serialize(self.summary(account))?;
        }
        csv_writer.flush()?;

        log::trace!("Export complete");
        Ok(())
    }

    /// Returns the number of accounts in the registry
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn summary<'a>(&'a self, account: &'a Account) -> AccountSummary<'a> {
        let holder = self.holder(account);
        AccountSummary {
            branch: account.branch_code(),
            account: account.number(),
            tax_id: holder.and_then(Customer::tax_id).unwrap_or_default(),
            holder: holder.and_then(Customer::name).unwrap_or_default(),
            balance: account.balance(),
            withdrawals: account.withdrawal_count(),
            transactions: account.history().len(),
        }
    }

    fn customer_id(&self, tax_id: &str) -> Result<CustomerId, ProcessingError> {
        self.tax_ids
            .get(tax_id)
            .copied()
            .ok_or_else(|| not_found(tax_id))
    }

    fn primary_account_number(&self, tax_id: &str) -> Result<AccountNumber, ProcessingError> {
        let customer = self.find_customer(tax_id).ok_or_else(|| not_found(tax_id))?;
        customer
            .accounts()
            .first()
            .copied()
            .ok_or_else(|| ProcessingError::NoAccount {
                tax_id: tax_id.to_string(),
            })
    }
}

/// One exported account row.
#[derive(Debug, Serialize)]
struct AccountSummary<'a> {
    branch: &'a str,
    account: AccountNumber,
    tax_id: &'a str,
    holder: &'a str,
    #[serde(serialize_with = "serialize_decimal_2dp")]
    balance: Decimal,
    withdrawals: usize,
    transactions: usize,
}

/// Serialize Decimal with exactly 2 decimal places
fn serialize_decimal_2dp<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}

/// Ids and account numbers are 1-based positions in their vectors.
/// `None` once the next position no longer fits a `u32`.
fn next_id(len: usize) -> Option<u32> {
    len.checked_add(1).and_then(|n| u32::try_from(n).ok())
}

fn index_of(id: u32) -> Option<usize> {
    usize::try_from(id).ok()?.checked_sub(1)
}

fn not_found(tax_id: &str) -> ProcessingError {
    ProcessingError::CustomerNotFound {
        tax_id: tax_id.to_string(),
    }
}
