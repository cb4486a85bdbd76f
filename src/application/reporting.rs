use serde::{Deserialize, Serialize};

use crate::domain::Amount;

/// Distribution of spending across categories, the data behind the chart
/// view. Categories are ordered by descending subtotal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub categories: Vec<CategorySummary>,
    pub total: Amount,
}

impl CategoryReport {
    /// True when there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total: Amount,
    /// Share of the grand total, 0-100. Zero when the grand total is zero.
    pub percentage: f64,
}
