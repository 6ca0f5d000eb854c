//! Basic example of using the `Bank`.
//!
//! Run with: `cargo run --example basic`

use bank_ledger::Bank;
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Sample operations as CSV
    let operations = r#"type,tax_id,amount,name,birth_date,address
customer,111,,Alice Souza,17-05-1990,"Rua A, 10 - Centro - Recife/PE"
customer,222,,Bruno Lima,02-03-1975,"Av. B, 200 - Boa Vista - Recife/PE"
account,111,,,,
account,222,,,,
deposit,111,1000,,,
withdrawal,111,400,,,
withdrawal,111,600,,,
deposit,222,250.75,,,
withdrawal,222,300,,,
withdrawal,111,100,,,
withdrawal,111,100,,,
withdrawal,111,100,,,
"#;

    // Create bank and process operations
    let mut bank = Bank::new();
    bank.process_operations(Cursor::new(operations))
        .expect("Failed to process operations");

    // Export results to stdout
    println!("\n=== Final Account State ===");
    bank.export_accounts(std::io::stdout())
        .expect("Failed to export accounts");
}
