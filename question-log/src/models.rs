//! Models for the question log.
//!
//! [`QuestionRecord`] maps to the `questions` table; [`CategoryCount`] and
//! [`QuestionStats`] are aggregation results used by the statistics report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged question. Immutable after insertion; `id` is assigned by the
/// store and strictly increasing in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuestionRecord {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub user_id: i64,
    pub username: Option<String>,
    /// Classifier output, stored verbatim (no validation at this layer).
    pub category: String,
    pub question: String,
}

/// One line of the per-category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Aggregate statistics over the question log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionStats {
    pub total: i64,
    /// Count of questions inside the trailing window (inclusive boundary).
    pub last_window: i64,
    /// Categories with counts, sorted by count descending.
    pub categories: Vec<CategoryCount>,
}
