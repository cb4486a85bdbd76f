use crate::domain::{Amount, Expense, NewExpense};
use crate::storage::Repository;

use super::{AppError, CategoryReport, CategorySummary};

/// Application service providing high-level operations for the expense
/// ledger. This is the primary interface for any client (CLI, TUI, etc.).
pub struct LedgerService {
    repo: Repository,
}

/// Records plus running total, the pair the shell refreshes together after
/// every mutation and at startup.
pub struct LedgerSummary {
    pub expenses: Vec<Expense>,
    pub total: Amount,
}

impl LedgerService {
    /// Create a new ledger service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Initialize the database at the given path, creating the file and
    /// schema when absent. Idempotent.
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = Repository::init(&db_url).await?;
        Ok(Self::new(repo))
    }

    /// Record a new expense and return it with its assigned id.
    ///
    /// The amount arrives already parsed; free-text validation happens at
    /// the presentation boundary. Non-finite values are refused here since
    /// a single NaN row would poison every aggregate.
    pub async fn add_expense(
        &self,
        date: String,
        category: String,
        description: Option<String>,
        amount: Amount,
    ) -> Result<Expense, AppError> {
        if !amount.is_finite() {
            return Err(AppError::InvalidAmount(
                "Amount must be a finite number".to_string(),
            ));
        }

        let mut expense = NewExpense::new(date, category, amount);
        if let Some(desc) = description {
            expense = expense.with_description(desc);
        }

        Ok(self.repo.insert_expense(&expense).await?)
    }

    /// List all recorded expenses in insertion order.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, AppError> {
        Ok(self.repo.list_expenses().await?)
    }

    /// Running total of all recorded expenses (0.0 when the ledger is empty).
    pub async fn total(&self) -> Result<Amount, AppError> {
        Ok(self.repo.total_amount().await?)
    }

    /// All expenses together with the running total.
    pub async fn summary(&self) -> Result<LedgerSummary, AppError> {
        let expenses = self.repo.list_expenses().await?;
        let total = self.repo.total_amount().await?;
        Ok(LedgerSummary { expenses, total })
    }

    /// Spending distribution across categories, largest subtotal first.
    /// Ties are broken by category name so the ordering is deterministic.
    pub async fn category_breakdown(&self) -> Result<CategoryReport, AppError> {
        let totals = self.repo.totals_by_category().await?;
        let grand_total: Amount = totals.values().sum();

        let mut categories: Vec<CategorySummary> = totals
            .into_iter()
            .map(|(category, total)| {
                let percentage = if grand_total != 0.0 {
                    (total / grand_total) * 100.0
                } else {
                    0.0
                };
                CategorySummary {
                    category,
                    total,
                    percentage,
                }
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(CategoryReport {
            categories,
            total: grand_total,
        })
    }
}
