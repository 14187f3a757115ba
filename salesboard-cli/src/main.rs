//! SalesBoard CLI — batch access to the reporting pipeline.
//!
//! Commands:
//! - `check` — load the dataset and report row counts, span, and fingerprint
//! - `summary` — print the KPI metrics and the three grouped totals
//! - `export` — write the filtered record set as a CSV report

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use salesboard_core::{format, load, render, Dataset, FilterCriteria};

#[derive(Parser)]
#[command(name = "salesboard", about = "SalesBoard CLI — sales reporting pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the dataset and report what the cleaner kept.
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print KPI metrics and grouped totals for the filtered view.
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Write the filtered record set as a CSV report.
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output file.
        #[arg(long, default_value = salesboard_core::export::EXPORT_FILE_NAME)]
        out: PathBuf,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Source CSV with the sales dataset.
    #[arg(long, default_value = "data/sales.csv")]
    data: PathBuf,
}

#[derive(Args)]
struct FilterArgs {
    /// Reporting period start (YYYY-MM-DD). Defaults to the dataset minimum.
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Reporting period end (YYYY-MM-DD). Defaults to the dataset maximum.
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Restrict to a country (repeatable; none = all countries).
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Restrict to a product (repeatable; none = all products).
    #[arg(long = "product")]
    products: Vec<String>,
}

impl FilterArgs {
    fn criteria(&self, dataset: &Dataset) -> FilterCriteria {
        let mut criteria = FilterCriteria::full_span(dataset);
        if let Some(start) = self.start {
            criteria.start = start;
        }
        if let Some(end) = self.end {
            criteria.end = end;
        }
        criteria.countries = self.countries.iter().cloned().collect::<BTreeSet<_>>();
        criteria.products = self.products.iter().cloned().collect::<BTreeSet<_>>();
        criteria
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Check { source } => cmd_check(&source),
        Commands::Summary { source, filters } => cmd_summary(&source, &filters),
        Commands::Export {
            source,
            filters,
            out,
        } => cmd_export(&source, &filters, &out),
    }
}

fn load_dataset(source: &SourceArgs) -> Result<Dataset> {
    load(&source.data).with_context(|| format!("loading {}", source.data.display()))
}

fn cmd_check(source: &SourceArgs) -> Result<()> {
    let dataset = load_dataset(source)?;

    println!("source:       {}", source.data.display());
    println!("rows kept:    {}", format::thousands(dataset.len() as i64));
    println!("rows dropped: {}", dataset.dropped_rows());
    match dataset.date_span() {
        Some((min, max)) => println!("date span:    {min} → {max}"),
        None => println!("date span:    (empty dataset)"),
    }
    println!("countries:    {}", dataset.countries().join(", "));
    println!("products:     {}", dataset.products().join(", "));
    println!("fingerprint:  {}", dataset.fingerprint());
    Ok(())
}

fn cmd_summary(source: &SourceArgs, filters: &FilterArgs) -> Result<()> {
    let dataset = load_dataset(source)?;
    let criteria = filters.criteria(&dataset);
    let view = render(&dataset, &criteria);
    let summary = &view.summary;

    println!(
        "Reporting period {} → {} ({} of {} rows)",
        criteria.start,
        criteria.end,
        view.filtered.len(),
        dataset.len()
    );
    println!();
    println!("Gross Revenue  {}", format::currency(summary.gross_revenue));
    println!("Net Revenue    {}", format::currency(summary.net_revenue));
    println!("Units Sold     {}", format::units(summary.total_units));

    print_group("Net revenue by country", &summary.by_country);
    print_group("Net revenue by product", &summary.by_product);
    print_group("Net revenue by month", &summary.by_month);
    Ok(())
}

fn print_group(title: &str, totals: &std::collections::BTreeMap<String, f64>) {
    println!();
    println!("{title}:");
    let width = totals.keys().map(|k| k.len()).max().unwrap_or(0);
    for (key, net) in totals {
        println!("  {key:<width$}  {:>12}", format::currency(*net));
    }
    if totals.is_empty() {
        println!("  (no matching records)");
    }
}

fn cmd_export(source: &SourceArgs, filters: &FilterArgs, out: &PathBuf) -> Result<()> {
    let dataset = load_dataset(source)?;
    let criteria = filters.criteria(&dataset);
    let view = render(&dataset, &criteria);

    salesboard_core::export::write_csv(&view.filtered, out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("wrote {} rows to {}", view.filtered.len(), out.display());
    Ok(())
}
