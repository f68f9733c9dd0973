//! YP Bank SWIFT Check - CLI tool for checking bank code / account number pairs.

use clap::Parser;
use std::fs::File;
use ypbank_swift::{
    logging::init_logging, valid_bank_code, valid_length, LengthCheck, ReferenceTable, Result,
};

#[derive(Parser)]
#[command(name = "ypbank_swift_check")]
#[command(about = "Check whether a bank code and account number fit together", long_about = None)]
struct Cli {
    /// Bank code, e.g. 500 for SEB
    #[arg(short, long = "bank-code")]
    bank_code: String,

    /// Account number, with or without the clearing code
    #[arg(short, long = "account-number")]
    account_number: String,

    /// Reference table CSV replacing the built-in Swedish table
    #[arg(short, long)]
    table: Option<String>,
}

fn main() {
    if let Err(e) = init_logging("ypbank_swift_check") {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let custom_table;
    let table = match cli.table {
        Some(ref path) => {
            let mut file = File::open(path)?;
            custom_table = ReferenceTable::from_read(&mut file)?;
            &custom_table
        }
        None => ReferenceTable::builtin(),
    };

    let bank_code_ok = valid_bank_code(table, &cli.bank_code, &cli.account_number);
    let length = valid_length(table, &cli.bank_code, &cli.account_number);

    println!(
        "bank code: {}",
        if bank_code_ok { "valid" } else { "invalid" }
    );
    println!("length: {}", length);

    Ok(bank_code_ok && length == LengthCheck::Valid)
}
