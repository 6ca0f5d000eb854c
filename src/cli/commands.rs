pub(crate) use clap::Parser;
use bank_ledger::{BankConfig, CheckingLimits, Decimal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bank-ledger",
    author,
    version,
    about = "A minimal retail-banking ledger",
    long_about = None,
    after_help = "INPUT:\n    CSV with columns: type, tax_id, amount, name, birth_date, address\n    where type is one of customer, account, deposit, withdrawal.\n\nOUTPUT:\n    Account summaries are printed to stdout in CSV format,\n    or per-account statements with --statement.\n\n    bank-ledger operations.csv > accounts.csv"
)]
pub struct Args {
    /// Path to the input operations CSV file
    #[arg(index = 1, value_name = "FILE")]
    pub input_file: PathBuf,

    /// Maximum amount of a single checking withdrawal
    #[arg(long, value_name = "AMOUNT", default_value = "500", value_parser = positive_amount)]
    pub withdrawal_limit: Decimal,

    /// Maximum number of withdrawals per checking account
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    pub max_withdrawals: usize,

    /// Print a statement per account instead of the CSV summary
    #[arg(long)]
    pub statement: bool,
}

impl Args {
    /// Registry settings selected on the command line
    pub fn bank_config(&self) -> BankConfig {
        BankConfig {
            checking: CheckingLimits {
                withdrawal_limit: self.withdrawal_limit,
                max_daily_withdrawals: self.max_withdrawals,
            },
        }
    }
}

fn positive_amount(value: &str) -> Result<Decimal, String> {
    let amount: Decimal = value
        .parse()
        .map_err(|e| format!("invalid amount {value:?}: {e}"))?;
    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(format!("amount must be greater than zero, got {amount}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bank-ledger", "ops.csv"]).unwrap();

        assert_eq!(args.input_file, PathBuf::from("ops.csv"));
        assert!(!args.statement);
        assert_eq!(args.bank_config(), BankConfig::default());
    }

    #[test]
    fn test_limits_and_statement_flags() {
        let args = Args::try_parse_from([
            "bank-ledger",
            "ops.csv",
            "--withdrawal-limit",
            "250.50",
            "--max-withdrawals",
            "10",
            "--statement",
        ])
        .unwrap();

        assert!(args.statement);
        assert_eq!(
            args.bank_config().checking,
            CheckingLimits {
                withdrawal_limit: dec!(250.50),
                max_daily_withdrawals: 10,
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_withdrawal_limit() {
        for limit in ["0", "-5"] {
            let flag = format!("--withdrawal-limit={limit}");
            let result = Args::try_parse_from(["bank-ledger", "ops.csv", flag.as_str()]);
            assert!(result.is_err(), "limit {limit} should be rejected");
        }
    }

    #[test]
    fn test_rejects_non_numeric_withdrawal_limit() {
        let result =
            Args::try_parse_from(["bank-ledger", "ops.csv", "--withdrawal-limit", "lots"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_negative_max_withdrawals() {
        let result = Args::try_parse_from(["bank-ledger", "ops.csv", "--max-withdrawals=-1"]);
        assert!(result.is_err());
    }
}
