//! assetlist CLI — build and inspect asset lists over a local data directory.
//!
//! Commands:
//! - `describe` — build a list and print its summary and per-symbol ranges
//! - `ror` — print the aligned return table as CSV on stdout
//! - `catalog` — list the symbols available in the data directory

use anyhow::Result;
use assetlist_core::{AssetList, AssetListBuilder, CsvStore, Month, ReturnTable};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assetlist",
    about = "Aligned, currency-normalized asset return series"
)]
struct Cli {
    /// Data directory containing catalog.toml and per-symbol CSV files.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an asset list and print its summary and per-symbol ranges.
    Describe {
        /// Symbols to include (e.g., SPY.US AGG.US).
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Base currency for the list.
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Skip the inflation series.
        #[arg(long, default_value_t = false)]
        no_inflation: bool,

        /// First month (YYYY-MM); only tightens the computed range.
        #[arg(long)]
        first: Option<Month>,

        /// Last month (YYYY-MM); only tightens the computed range.
        #[arg(long)]
        last: Option<Month>,
    },
    /// Print the aligned return table as CSV on stdout.
    Ror {
        /// Symbols to include (e.g., SPY.US AGG.US).
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Base currency for the list.
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Include the inflation column, inner-joined onto the table.
        #[arg(long, default_value_t = false)]
        with_inflation: bool,

        /// First month (YYYY-MM); only tightens the computed range.
        #[arg(long)]
        first: Option<Month>,

        /// Last month (YYYY-MM); only tightens the computed range.
        #[arg(long)]
        last: Option<Month>,
    },
    /// List the symbols available in the data directory.
    Catalog,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = CsvStore::open(&cli.data_dir)?;

    match cli.command {
        Commands::Describe {
            symbols,
            currency,
            no_inflation,
            first,
            last,
        } => {
            let list = build_list(&store, &symbols, &currency, !no_inflation, first, last)?;
            println!("{list}");
            println!();
            println!("ranges:");
            for (symbol, first) in list.assets_first_dates() {
                if let Some(last) = list.assets_last_dates().get(symbol) {
                    println!("  {symbol}: {first} .. {last}");
                }
            }
            println!("newest asset: {}", list.newest_asset());
            println!("eldest asset: {}", list.eldest_asset());
        }
        Commands::Ror {
            symbols,
            currency,
            with_inflation,
            first,
            last,
        } => {
            let list = build_list(&store, &symbols, &currency, with_inflation, first, last)?;
            let table = if with_inflation {
                list.ror_with_inflation()
            } else {
                list.assets_ror().clone()
            };
            print_table(&table)?;
        }
        Commands::Catalog => {
            for symbol in store.symbols() {
                if let Some(meta) = store.meta(symbol) {
                    println!("{symbol}\t{}\t{}", meta.currency, meta.name);
                }
            }
        }
    }

    Ok(())
}

fn build_list(
    store: &CsvStore,
    symbols: &[String],
    currency: &str,
    inflation: bool,
    first: Option<Month>,
    last: Option<Month>,
) -> Result<AssetList> {
    let mut builder = AssetListBuilder::new()
        .assets(symbols)
        .currency(currency)
        .inflation(inflation);
    if let Some(first) = first {
        builder = builder.first_date(first);
    }
    if let Some(last) = last {
        builder = builder.last_date(last);
    }
    Ok(builder.build(store)?)
}

fn print_table(table: &ReturnTable) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    let mut header = vec!["date".to_string()];
    header.extend(table.columns().iter().cloned());
    writer.write_record(&header)?;
    for (row, month) in table.index().iter().enumerate() {
        let mut record = vec![month.to_string()];
        record.extend(table.row(row).iter().map(|value| value.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
