use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{CategoryReport, LedgerService};
use crate::domain::{format_amount, parse_amount};

/// Spesa - Personal Expense Ledger
#[derive(Parser)]
#[command(name = "spesa")]
#[command(about = "A local-first personal expense ledger for the command line")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "spesa.db")]
    pub database: String,

    /// Currency symbol used for display (never stored)
    #[arg(short, long, global = true, default_value = "₹")]
    pub currency: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Record a new expense
    Add {
        /// Amount spent (e.g., "120.50" or "99"); negative records a refund
        amount: String,

        /// Category label for grouping (e.g., "Food", "Travel")
        #[arg(short = 'C', long)]
        category: String,

        /// Description of the expense
        #[arg(long)]
        description: Option<String>,

        /// Date of the expense (stored verbatim, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List all recorded expenses with the running total
    List,

    /// Show the running total of all recorded expenses
    Total,

    /// Show the expense distribution by category
    Chart {
        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Export expenses to CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Every invocation ensures the schema exists before acting; the
        // migration never touches existing rows.
        let service = LedgerService::init(&self.database).await?;

        match self.command {
            Commands::Init => {
                println!("Database initialized: {}", self.database);
            }

            Commands::Add {
                amount,
                category,
                description,
                date,
            } => {
                let amount = parse_amount(&amount)
                    .context("Invalid amount. Use a number like '120.50' or '99'")?;

                // Free-form column; only the default is date-shaped
                let date = date
                    .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

                let expense = service
                    .add_expense(date, category, description, amount)
                    .await?;

                println!(
                    "Recorded expense #{}: {}{} ({})",
                    expense.id,
                    self.currency,
                    format_amount(expense.amount),
                    expense.category
                );

                let total = service.total().await?;
                println!("Total expenses: {}{}", self.currency, format_amount(total));
            }

            Commands::List => {
                run_list_command(&service, &self.currency).await?;
            }

            Commands::Total => {
                let total = service.total().await?;
                println!("Total expenses: {}{}", self.currency, format_amount(total));
            }

            Commands::Chart { format } => {
                run_chart_command(&service, &self.currency, &format).await?;
            }

            Commands::Export { output } => {
                run_export_command(&service, output.as_deref()).await?;
            }
        }

        Ok(())
    }
}

async fn run_list_command(service: &LedgerService, currency: &str) -> Result<()> {
    let summary = service.summary().await?;

    if summary.expenses.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    println!(
        "{:>4} {:<12} {:<15} {:>12} DESCRIPTION",
        "ID", "DATE", "CATEGORY", "AMOUNT"
    );
    println!("{}", "-".repeat(70));

    for expense in &summary.expenses {
        let desc = expense.description.as_deref().unwrap_or("");
        println!(
            "{:>4} {:<12} {:<15} {:>12} {}",
            expense.id,
            truncate(&expense.date, 12),
            truncate(&expense.category, 15),
            format_amount(expense.amount),
            truncate(desc, 30)
        );
    }

    println!("{}", "-".repeat(70));
    println!(
        "{:>4} {:<12} {:<15} {:>12}",
        "",
        "",
        "TOTAL",
        format!("{}{}", currency, format_amount(summary.total))
    );

    Ok(())
}

async fn run_chart_command(service: &LedgerService, currency: &str, format: &str) -> Result<()> {
    let report = service.category_breakdown().await?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "csv" => {
            println!("category,total,percentage");
            for cat in &report.categories {
                println!("{},{},{:.2}", cat.category, cat.total, cat.percentage);
            }
        }
        _ => {
            if report.is_empty() {
                println!("No expenses to chart.");
                return Ok(());
            }

            render_distribution(&report, currency);
        }
    }

    Ok(())
}

/// Terminal rendition of the category pie chart: one proportional bar per
/// category plus its share of the total.
fn render_distribution(report: &CategoryReport, currency: &str) {
    let max_total = report
        .categories
        .iter()
        .map(|c| c.total)
        .fold(0.0_f64, f64::max);

    println!("Expense Distribution by Category");
    println!();
    println!(
        "{:<15} {:>12}  {:<24} {:>7}",
        "CATEGORY", "TOTAL", "", "SHARE"
    );
    println!("{}", "-".repeat(62));

    for cat in &report.categories {
        println!(
            "{:<15} {:>12}  {:<24} {:>6.1}%",
            truncate(&cat.category, 15),
            format_amount(cat.total),
            ascii_bar(cat.total, max_total, 24),
            cat.percentage
        );
    }

    println!("{}", "-".repeat(62));
    println!(
        "{:<15} {:>12}",
        "TOTAL",
        format!("{}{}", currency, format_amount(report.total))
    );
}

async fn run_export_command(service: &LedgerService, output: Option<&str>) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{stdout, Write};

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    let count = exporter.export_expenses_csv(writer).await?;
    if output.is_some() {
        eprintln!("Exported {} expenses", count);
    }

    Ok(())
}

/// Simple horizontal bar like `████████░░░░` representing value against the
/// largest category. Negative subtotals (all-refund categories) render empty.
fn ascii_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_bar() {
        assert_eq!(ascii_bar(10.0, 10.0, 4), "████");
        assert_eq!(ascii_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(ascii_bar(0.0, 10.0, 4), "░░░░");
        assert_eq!(ascii_bar(-3.0, 10.0, 4), "░░░░");
    }

    #[test]
    fn test_ascii_bar_empty_ledger() {
        assert_eq!(ascii_bar(0.0, 0.0, 4), "░░░░");
    }
}
