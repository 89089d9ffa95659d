//! Question repository: append-only writes and aggregation reads.
//!
//! Owns the SQLite pool and the models (QuestionRecord, CategoryCount,
//! QuestionStats). External: SQLite via sqlx; callers use
//! log_question/total_count/count_since_days/category_breakdown/stats.

use crate::error::StorageError;
use crate::models::{CategoryCount, QuestionRecord, QuestionStats};
use chrono::Utc;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::info;

#[derive(Clone)]
pub struct QuestionRepository {
    pool: SqlitePool,
}

impl QuestionRepository {
    /// Opens (creating if missing) the database and ensures the table exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        info!("Opening question log database: {}", database_url);

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(database_url);

        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating questions table if not exists");

        let pool = &self.pool;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                user_id INTEGER NOT NULL,
                username TEXT,
                category TEXT NOT NULL,
                question TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_questions_date ON questions(date);
            CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Appends one question with the current UTC timestamp and returns its row id.
    pub async fn log_question(
        &self,
        user_id: i64,
        username: Option<&str>,
        category: &str,
        question: &str,
    ) -> Result<i64, StorageError> {
        let pool = &self.pool;

        let result = sqlx::query(
            r#"
            INSERT INTO questions (date, user_id, username, category, question)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(Utc::now())
        .bind(user_id)
        .bind(username)
        .bind(category)
        .bind(question)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(
            user_id = user_id,
            category = %category,
            id = id,
            "Logged question"
        );
        Ok(id)
    }

    /// Count of all questions ever logged.
    pub async fn total_count(&self) -> Result<i64, StorageError> {
        let pool = &self.pool;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;

        Ok(total.0)
    }

    /// Count of questions with `date >= now - days` (boundary inclusive).
    pub async fn count_since_days(&self, days: i64) -> Result<i64, StorageError> {
        let pool = &self.pool;
        let cutoff = Utc::now() - chrono::Duration::days(days);

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions WHERE date >= ?")
            .bind(cutoff)
            .fetch_one(pool)
            .await?;

        Ok(count.0)
    }

    /// All distinct categories with their counts, sorted by count descending.
    /// Tie order between equal counts is whatever SQLite yields.
    pub async fn category_breakdown(&self) -> Result<Vec<CategoryCount>, StorageError> {
        let pool = &self.pool;

        let rows: Vec<CategoryCount> = sqlx::query_as(
            r#"
            SELECT category, COUNT(*) as count
            FROM questions
            GROUP BY category
            ORDER BY COUNT(*) DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// The three aggregation reads combined, for the statistics report.
    pub async fn stats(&self, window_days: i64) -> Result<QuestionStats, StorageError> {
        Ok(QuestionStats {
            total: self.total_count().await?,
            last_window: self.count_since_days(window_days).await?,
            categories: self.category_breakdown().await?,
        })
    }

    /// Most recent questions, newest first. Used by tests and ad-hoc inspection.
    pub async fn recent_questions(&self, limit: i64) -> Result<Vec<QuestionRecord>, StorageError> {
        let pool = &self.pool;

        let records: Vec<QuestionRecord> =
            sqlx::query_as("SELECT * FROM questions ORDER BY id DESC LIMIT ?")
                .bind(limit)
                .fetch_all(pool)
                .await?;

        Ok(records)
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
