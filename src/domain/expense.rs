use serde::{Deserialize, Serialize};

use super::Amount;

/// Store-assigned surrogate key (SQLite rowid).
pub type ExpenseId = i64;

/// A single dated expense entry. Entries are immutable once recorded - the
/// ledger is append-only and exposes no update or delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Free-form date text as the user entered it (no format enforced)
    pub date: String,
    /// Grouping label chosen by the user (e.g., "Food", "Travel")
    pub category: String,
    pub description: Option<String>,
    /// Signed amount; negative values record refunds
    pub amount: Amount,
}

/// An expense that has not been persisted yet. The id is assigned by the
/// store on insert.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub description: Option<String>,
    pub amount: Amount,
}

impl NewExpense {
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: Amount) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            description: None,
            amount,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
