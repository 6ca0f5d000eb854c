use chrono::NaiveDate;
use serde::Deserialize;

use super::customer::Person;
use super::error::OperationError;
use super::Decimal;

/// Format of birth dates in operation records
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Raw operation record as parsed from CSV input.
/// This is the unvalidated form that needs conversion to an `Operation`.
#[derive(Debug, Deserialize, Clone)]
pub struct OperationRecord {
    #[serde(rename = "type")]
    pub op_type: OperationType,
    pub tax_id: String,
    /// Required for deposit/withdrawal
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Name, birth date and address are required for customer creation
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl std::fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.amount {
            Some(amount) => write!(
                f,
                "{} (tax_id: {}, amount: {})",
                self.op_type, self.tax_id, amount
            ),
            None => write!(f, "{} (tax_id: {})", self.op_type, self.tax_id),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Customer,
    Account,
    Deposit,
    Withdrawal,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationType::Customer => write!(f, "customer"),
            OperationType::Account => write!(f, "account"),
            OperationType::Deposit => write!(f, "deposit"),
            OperationType::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// A well-formed registry operation, ready to run against a `Bank`.
///
/// Amounts are carried as given: positivity and the account rules are
/// checked when the operation is executed, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateCustomer { person: Person, address: String },
    OpenAccount { tax_id: String },
    Deposit { tax_id: String, amount: Decimal },
    Withdrawal { tax_id: String, amount: Decimal },
}

impl Operation {
    pub fn tax_id(&self) -> &str {
        match self {
            Operation::CreateCustomer { person, .. } => &person.tax_id,
            Operation::OpenAccount { tax_id }
            | Operation::Deposit { tax_id, .. }
            | Operation::Withdrawal { tax_id, .. } => tax_id,
        }
    }
}

impl TryFrom<OperationRecord> for Operation {
    type Error = OperationError;

    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        match record {
            OperationRecord {
                op_type: OperationType::Customer,
                tax_id,
                name: Some(name),
                birth_date: Some(birth_date),
                address: Some(address),
                ..
            } if !tax_id.is_empty() => {
                let birth_date = NaiveDate::parse_from_str(&birth_date, BIRTH_DATE_FORMAT)
                    .map_err(|_| OperationError::InvalidBirthDate {
                        tax_id: tax_id.clone(),
                        value: birth_date.clone(),
                    })?;
                Ok(Operation::CreateCustomer {
                    person: Person {
                        name,
                        birth_date,
                        tax_id,
                    },
                    address,
                })
            }
            OperationRecord {
                op_type: OperationType::Account,
                tax_id,
                ..
            } if !tax_id.is_empty() => Ok(Operation::OpenAccount { tax_id }),
            OperationRecord {
                op_type: OperationType::Deposit,
                tax_id,
                amount: Some(amount),
                ..
            } if !tax_id.is_empty() => Ok(Operation::Deposit { tax_id, amount }),
            OperationRecord {
                op_type: OperationType::Withdrawal,
                tax_id,
                amount: Some(amount),
                ..
            } if !tax_id.is_empty() => Ok(Operation::Withdrawal { tax_id, amount }),
            _ => Err(OperationError::InvalidOperation(record)),
        }
    }
}
