//! YP Bank SWIFT Converter - CLI tool for converting Swedish accounts to SWIFT format.

use clap::Parser;
use std::fs::File;
use std::io::{self, Write};
use ypbank_swift::{
    batch::{convert_batch, convert_requests, ConversionRequest, OutputFormat},
    logging::init_logging,
    ReferenceTable, Result,
};

#[derive(Parser)]
#[command(name = "ypbank_swift")]
#[command(about = "Convert Swedish domestic bank accounts to SWIFT format", long_about = None)]
struct Cli {
    /// Clearing (branch) code, if given separately from the account number
    #[arg(short, long = "branch-code")]
    branch_code: Option<String>,

    /// Account number to convert; without it accounts are read as CSV
    #[arg(short, long = "account-number")]
    account_number: Option<String>,

    /// Input CSV with branch_code,account_number columns (or stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file path (or stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format (text, csv)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Reference table CSV replacing the built-in Swedish table
    #[arg(short, long)]
    table: Option<String>,
}

fn main() {
    if let Err(e) = init_logging("ypbank_swift") {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format.parse::<OutputFormat>()?;

    let custom_table;
    let table = match cli.table {
        Some(ref path) => {
            let mut file = File::open(path)?;
            custom_table = ReferenceTable::from_read(&mut file)?;
            &custom_table
        }
        None => ReferenceTable::builtin(),
    };

    if let Some(ref output_path) = cli.output {
        let mut file = File::create(output_path)?;
        process(&cli, table, &mut file, format)
    } else {
        let mut stdout = io::stdout();
        process(&cli, table, &mut stdout, format)
    }
}

fn process<W: Write>(
    cli: &Cli,
    table: &ReferenceTable,
    writer: &mut W,
    format: OutputFormat,
) -> Result<()> {
    if let Some(ref account_number) = cli.account_number {
        let request = ConversionRequest {
            branch_code: cli.branch_code.clone(),
            account_number: account_number.clone(),
        };
        convert_requests(table, [Ok(request)], writer, format)?;
        return Ok(());
    }

    if cli.branch_code.is_some() {
        log::warn!("--branch-code is ignored without --account-number");
    }

    if let Some(ref input_path) = cli.input {
        let mut file = File::open(input_path)?;
        convert_batch(table, &mut file, writer, format)?;
    } else {
        let mut stdin = io::stdin();
        convert_batch(table, &mut stdin, writer, format)?;
    }

    Ok(())
}
