use std::str::FromStr;

use log::debug;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::quiz::selection::QuizScope;
use crate::quiz::{Category, NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Access to the `questions` and `categories` tables.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    pool: SqlitePool,
}

impl QuestionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool on `database_url`, creating the database file if needed.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Every question, ascending by id.
    pub async fn questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions ORDER BY id",
            QUESTION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions WHERE category = ? ORDER BY id",
            QUESTION_COLUMNS
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }

    /// Candidate questions for a quiz played in `scope`.
    pub async fn quiz_pool(&self, scope: QuizScope) -> Result<Vec<Question>, sqlx::Error> {
        match scope {
            QuizScope::AllCategories => self.questions().await,
            QuizScope::Category(category) => self.questions_in_category(category).await,
        }
    }

    pub async fn question(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions WHERE id = ?",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Stores `new_question` and returns its id. Ids are never reused, so the
    /// result is greater than any id handed out before.
    pub async fn insert(&self, new_question: &NewQuestion) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_question.question)
        .bind(&new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted question {}", id);
        Ok(id)
    }

    /// Removes a question, returning whether a row was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Deleted question {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected() > 0)
    }
}
