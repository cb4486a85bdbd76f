mod common;

use anyhow::Result;
use common::{SampleExpenses, test_service};
use spesa::io::Exporter;

#[tokio::test]
async fn test_export_expenses_csv() -> Result<()> {
    let (service, _temp) = test_service().await?;

    SampleExpenses::seed_basic(&service).await?;

    let exporter = Exporter::new(&service);
    let mut buffer = Vec::new();
    let count = exporter.export_expenses_csv(&mut buffer).await?;

    assert_eq!(count, 3);

    let output = String::from_utf8(buffer)?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 4); // header + 3 records
    assert_eq!(lines[0], "id,date,category,description,amount");
    assert!(lines[1].contains("Food"));
    assert!(lines[1].contains("Groceries"));
    assert!(lines[3].contains("Travel"));

    Ok(())
}

#[tokio::test]
async fn test_export_empty_store() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let exporter = Exporter::new(&service);
    let mut buffer = Vec::new();
    let count = exporter.export_expenses_csv(&mut buffer).await?;

    assert_eq!(count, 0);

    let output = String::from_utf8(buffer)?;
    assert_eq!(output.lines().count(), 1); // header only

    Ok(())
}
