use std::collections::HashMap;

use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};

use crate::domain::{Amount, Expense, NewExpense};

use super::MIGRATION_001_INITIAL;

/// Repository for persisting and querying expense records.
///
/// The pool acquires a connection per statement and releases it on every
/// exit path, so no handle outlives the operation that needed it.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations. Idempotent: existing tables and their rows
    /// are left untouched.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;

        Ok(())
    }

    /// Initialize a database (connect + migrate). Safe to call on every
    /// process start.
    pub async fn init(database_url: &str) -> Result<Self> {
        let repo = Self::connect(database_url).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    /// Insert one expense record and return it with its store-assigned id.
    pub async fn insert_expense(&self, expense: &NewExpense) -> Result<Expense> {
        let row = sqlx::query(
            r#"
            INSERT INTO expenses (date, category, description, amount)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&expense.date)
        .bind(&expense.category)
        .bind(&expense.description)
        .bind(expense.amount)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert expense")?;

        Ok(Expense {
            id: row.get("id"),
            date: expense.date.clone(),
            category: expense.category.clone(),
            description: expense.description.clone(),
            amount: expense.amount,
        })
    }

    /// List all expenses in insertion order.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>> {
        let rows = sqlx::query(
            r#"
            SELECT id, date, category, description, amount
            FROM expenses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list expenses")?;

        rows.iter().map(Self::row_to_expense).collect()
    }

    /// Sum of all expense amounts. An empty ledger totals 0.0, not an error.
    pub async fn total_amount(&self) -> Result<Amount> {
        let row = sqlx::query(
            r#"
            SELECT COALESCE(SUM(amount), 0.0) as total
            FROM expenses
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .context("Failed to compute total")?;

        Ok(row.get("total"))
    }

    /// Sum of amounts per distinct category, as a map of category name to
    /// subtotal. An empty ledger yields an empty map.
    pub async fn totals_by_category(&self) -> Result<HashMap<String, Amount>> {
        let rows = sqlx::query(
            r#"
            SELECT category, SUM(amount) as total
            FROM expenses
            GROUP BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to compute category totals")?;

        let mut totals = HashMap::new();
        for row in rows {
            let category: String = row.get("category");
            let total: Amount = row.get("total");
            totals.insert(category, total);
        }

        Ok(totals)
    }

    fn row_to_expense(row: &sqlx::sqlite::SqliteRow) -> Result<Expense> {
        Ok(Expense {
            id: row.get("id"),
            date: row.get("date"),
            category: row.get("category"),
            description: row.get("description"),
            amount: row.get("amount"),
        })
    }
}
