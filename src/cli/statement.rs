use std::fmt;

use bank_ledger::{Account, Customer};

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
const RULE: &str = "========================================";

/// Printable statement of one account: its header, every recorded
/// transaction and the current balance.
pub struct Statement<'a> {
    pub account: &'a Account,
    pub holder: Option<&'a Customer>,
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let holder = self.holder.and_then(Customer::name).unwrap_or("-");
        writeln!(f, "{RULE}")?;
        writeln!(f, "Branch:\t\t{}", self.account.branch_code())?;
        writeln!(f, "Account:\t{}", self.account.number())?;
        writeln!(f, "Holder:\t\t{holder}")?;
        writeln!(f, "{RULE}")?;

        let entries = self.account.history().entries();
        if entries.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }
        for entry in entries {
            writeln!(
                f,
                "{}:\n\t{:.2} ({})",
                entry.kind(),
                entry.amount(),
                entry.timestamp().format(TIMESTAMP_FORMAT)
            )?;
        }

        writeln!(f, "\nBalance:\t{:.2}", self.account.balance())?;
        writeln!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_ledger::{Bank, Person};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn bank() -> Bank {
        let mut bank = Bank::new();
        let person = Person {
            name: "Alice".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            tax_id: "111".to_string(),
        };
        bank.create_customer(person, "1 Main St").unwrap();
        bank.open_account("111").unwrap();
        bank
    }

    fn render(bank: &Bank) -> String {
        let account = bank.account(1).unwrap();
        Statement {
            account,
            holder: bank.holder(account),
        }
        .to_string()
    }

    #[test]
    fn test_empty_statement() {
        let text = render(&bank());

        assert!(text.contains("Branch:\t\t0001"));
        assert!(text.contains("Account:\t1"));
        assert!(text.contains("Holder:\t\tAlice"));
        assert!(text.contains("No transactions recorded."));
        assert!(text.contains("Balance:\t0.00"));
    }

    #[test]
    fn test_statement_lists_entries_in_order() {
        let mut bank = bank();
        bank.deposit("111", dec!(1000)).unwrap();
        bank.withdraw("111", dec!(250.5)).unwrap();
        let text = render(&bank);

        let deposit = text.find("Deposit:\n\t1000.00 (").unwrap();
        let withdrawal = text.find("Withdrawal:\n\t250.50 (").unwrap();
        assert!(deposit < withdrawal);
        assert!(!text.contains("No transactions recorded."));
        assert!(text.contains("Balance:\t749.50"));
    }
}
