use std::fs::File;

use anyhow::Context;
use clap::Parser;

use fruit_shop::domain::{FruitTransaction, Operation};
use fruit_shop::engine::FruitShop;
use fruit_shop::output;
use fruit_shop::parsing;

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    if let Some(log_level) = args.log_level {
        tracing_subscriber::fmt().with_max_level(log_level).init();
    }

    let file = File::open(&args.stock_file)
        .with_context(|| format!("Failed to open stock file {}", args.stock_file))?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let storage = parsing::read_stock(&mut rdr);

    let mut shop = FruitShop::with_storage(storage);
    let transaction = FruitTransaction::new(args.operation, args.fruit, args.quantity);
    shop.process_transaction(&transaction)
        .with_context(|| format!("Failed to apply {transaction}"))?;

    output::print_report(shop.storage(), std::io::stdout())
}

/// Applies one fruit transaction to a stock file and prints the resulting stock.
#[derive(Parser)]
struct Arguments {
    /// CSV with a `fruit,quantity` header.
    stock_file: String,
    /// `b`, `s`, `p`, `r` or the full operation name.
    operation: Operation,
    fruit: String,
    #[arg(allow_negative_numbers = true)]
    quantity: i64,
    #[arg(long)]
    log_level: Option<tracing::Level>,
}
