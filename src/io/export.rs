use anyhow::Result;
use std::io::Write;

use crate::application::LedgerService;

/// Exporter for writing ledger data to external formats.
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export all expenses to CSV format. Returns the number of records
    /// written.
    pub async fn export_expenses_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let expenses = self.service.list_expenses().await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "date", "category", "description", "amount"])?;

        let mut count = 0;
        for expense in &expenses {
            csv_writer.write_record(&[
                expense.id.to_string(),
                expense.date.clone(),
                expense.category.clone(),
                expense.description.clone().unwrap_or_default(),
                expense.amount.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }
}
