// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use spesa::application::LedgerService;
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = LedgerService::init(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Test fixture: canned expense entries
pub struct SampleExpenses;

impl SampleExpenses {
    /// Two food entries and one travel entry: Food 10.0 + 5.0, Travel 20.0
    pub async fn seed_basic(service: &LedgerService) -> Result<()> {
        service
            .add_expense(
                "2024-03-01".into(),
                "Food".into(),
                Some("Groceries".into()),
                10.0,
            )
            .await?;
        service
            .add_expense("2024-03-02".into(), "Food".into(), None, 5.0)
            .await?;
        service
            .add_expense(
                "2024-03-03".into(),
                "Travel".into(),
                Some("Train ticket".into()),
                20.0,
            )
            .await?;
        Ok(())
    }
}
