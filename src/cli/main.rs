mod commands;
mod statement;

use anyhow::{Context, Result};
use bank_ledger::Bank;
use commands::{Args, Parser};
use statement::Statement;

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of info (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Initialize the Bank with the requested checking rules
    let mut bank = Bank::with_config(args.bank_config());
    log::debug!("Checking rules: {:?}", bank.config().checking);

    // 2. Open and process the input file
    log::info!("Processing operations from {}", args.input_file.display());
    let file = std::fs::File::open(&args.input_file)
        .with_context(|| format!("Failed to open input file: {}", args.input_file.display()))?;

    bank.process_operations(file)
        .context("Failed to process operations")?;

    log::info!(
        "Processing complete, reporting {} accounts",
        bank.account_count()
    );

    // 3. Report to stdout
    if args.statement {
        for account in bank.accounts() {
            print!(
                "{}",
                Statement {
                    account,
                    holder: bank.holder(account),
                }
            );
        }
    } else {
        bank.export_accounts(std::io::stdout())
            .context("Failed to export accounts to stdout")?;
    }

    log::info!("Report complete");

    Ok(())
}
