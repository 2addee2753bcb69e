use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;

use ledger_rs::{
    Recorder, TransactionKind, TransactionRequest,
    store::{LedgerStore, SQLiteLedgerStore},
};

/// A utility for creating a ledger database with sample transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_TRANSACTIONS: [(&str, &str, &str, TransactionKind); 8] = [
    ("3200.00", "Salary", "2024-01-31", TransactionKind::Income),
    ("1450.00", "Rent", "2024-02-01", TransactionKind::Expense),
    ("86.40", "Groceries", "2024-02-03", TransactionKind::Expense),
    ("12.50", "Coffee", "2024-02-05", TransactionKind::Expense),
    ("250", "Freelance", "2024-02-10", TransactionKind::Income),
    ("64.99", "Electricity", "2024-02-14", TransactionKind::Expense),
    ("3200.00", "Salary", "2024-02-29", TransactionKind::Income),
    ("42.10", "Groceries", "2024-03-02", TransactionKind::Expense),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_ledger.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_ledger.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let store = SQLiteLedgerStore::new(&args.output_path);
    store.ensure_schema()?;

    println!("Adding {} sample transactions...", SAMPLE_TRANSACTIONS.len());
    let recorder = Recorder::new(store);
    let mut snapshot = recorder.snapshot()?;

    for (amount, category, date, kind) in SAMPLE_TRANSACTIONS {
        let request = TransactionRequest::new(amount, category, date, kind);
        snapshot = recorder.submit(&request)?.snapshot?;
    }

    println!("{}", snapshot.summary);
    println!("Success!");

    Ok(())
}
