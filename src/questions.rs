#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct IncorrectAnswer {
    pub id: i64,
    pub question_id: i64,
    pub answer_text: String,
}

/// A question row that has not been written yet; the database assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question_text: String,
    pub correct_answer: String,
}

impl NewQuestion {
    /// Inserts the question and returns the id MySQL generated for it.
    pub async fn insert(&self, conn: &mut MySqlConnection) -> anyhow::Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question_text, correct_answer)
            VALUES (?, ?)
            "#,
        )
        .bind(&self.question_text)
        .bind(&self.correct_answer)
        .execute(&mut *conn)
        .await
        .with_context(|| format!("Failed to insert question: {}", self.question_text))?;

        i64::try_from(result.last_insert_id())
            .context("Generated question id does not fit in a signed 64-bit integer")
    }
}

pub async fn insert_incorrect_answer(
    conn: &mut MySqlConnection,
    question_id: i64,
    answer_text: &str,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO incorrect_answers (question_id, answer_text)
        VALUES (?, ?)
        "#,
    )
    .bind(question_id)
    .bind(answer_text)
    .execute(&mut *conn)
    .await
    .with_context(|| {
        format!(
            "Failed to insert incorrect answer '{}' for question_id: {}",
            answer_text, question_id
        )
    })?;

    Ok(())
}

use anyhow::Context;
use serde::Serialize;
use sqlx::FromRow;
use sqlx::MySqlConnection;
