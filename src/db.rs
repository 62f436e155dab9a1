/// Statements run by the reset step, in execution order.
pub const RESET_STATEMENTS: [(&str, &str); 4] = [
    ("incorrect_answers", "DELETE FROM incorrect_answers"),
    ("questions", "DELETE FROM questions"),
    ("users", "DELETE FROM users"),
    ("scores", "DELETE FROM scores"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub questions: i64,
    pub incorrect_answers: i64,
    pub users: i64,
    pub scores: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    #[serde(flatten)]
    pub question: Question,
    pub incorrect_answers: Vec<String>,
}

/// Everything `check` shows about the seeded tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseReport {
    pub counts: TableCounts,
    pub questions: Vec<QuestionView>,
    pub users: Vec<UserSummary>,
    pub scores: Vec<Score>,
}

/// Opens the single connection every command runs on.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<MySqlConnection> {
    MySqlConnection::connect_with(&config.connect_options())
        .await
        .with_context(|| {
            format!(
                "Failed to connect to MySQL at {}:{} (database '{}', user '{}')",
                config.host, config.port, config.database, config.user
            )
        })
}

/// Deletes every row from the four seeded tables.
///
/// Foreign keys are not consulted; the order is fixed by `RESET_STATEMENTS`.
pub async fn reset_tables(conn: &mut MySqlConnection) -> anyhow::Result<()> {
    for (table, statement) in RESET_STATEMENTS {
        let result = sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .with_context(|| format!("Failed to clear table: {}", table))?;
        debug!(table, rows = result.rows_affected(), "Cleared table");
    }

    Ok(())
}

pub async fn fetch_counts(conn: &mut MySqlConnection) -> anyhow::Result<TableCounts> {
    Ok(TableCounts {
        questions: count_rows(conn, "questions", "SELECT COUNT(*) FROM questions").await?,
        incorrect_answers: count_rows(
            conn,
            "incorrect_answers",
            "SELECT COUNT(*) FROM incorrect_answers",
        )
        .await?,
        users: count_rows(conn, "users", "SELECT COUNT(*) FROM users").await?,
        scores: count_rows(conn, "scores", "SELECT COUNT(*) FROM scores").await?,
    })
}

async fn count_rows(
    conn: &mut MySqlConnection,
    table: &str,
    statement: &'static str,
) -> anyhow::Result<i64> {
    sqlx::query_scalar::<_, i64>(statement)
        .fetch_one(&mut *conn)
        .await
        .with_context(|| format!("Failed to count rows in table: {}", table))
}

pub async fn fetch_all_questions(conn: &mut MySqlConnection) -> anyhow::Result<Vec<Question>> {
    // CAST keeps the decoded type stable whether the schema uses INT or BIGINT ids.
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT CAST(id AS SIGNED) AS id, question_text, correct_answer
        FROM questions
        ORDER BY id ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .context("Failed to fetch questions from the database.")?;

    Ok(questions)
}

pub async fn fetch_all_incorrect_answers(
    conn: &mut MySqlConnection,
) -> anyhow::Result<Vec<IncorrectAnswer>> {
    let answers = sqlx::query_as::<_, IncorrectAnswer>(
        r#"
        SELECT
            CAST(id AS SIGNED) AS id,
            CAST(question_id AS SIGNED) AS question_id,
            answer_text
        FROM incorrect_answers
        ORDER BY question_id ASC, id ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .context("Failed to fetch incorrect answers from the database.")?;

    Ok(answers)
}

pub async fn fetch_all_users(conn: &mut MySqlConnection) -> anyhow::Result<Vec<UserSummary>> {
    let users = sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT email, is_admin
        FROM users
        ORDER BY email ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .context("Failed to fetch users from the database.")?;

    Ok(users)
}

pub async fn fetch_all_scores(conn: &mut MySqlConnection) -> anyhow::Result<Vec<Score>> {
    let scores = sqlx::query_as::<_, Score>(
        r#"
        SELECT user_email, CAST(score AS SIGNED) AS score
        FROM scores
        ORDER BY user_email ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .context("Failed to fetch scores from the database.")?;

    Ok(scores)
}

pub async fn fetch_report(conn: &mut MySqlConnection) -> anyhow::Result<DatabaseReport> {
    let counts = fetch_counts(conn).await?;
    let questions = fetch_all_questions(conn).await?;
    let answers = fetch_all_incorrect_answers(conn).await?;
    let users = fetch_all_users(conn).await?;
    let scores = fetch_all_scores(conn).await?;

    Ok(DatabaseReport {
        counts,
        questions: group_answers(questions, answers),
        users,
        scores,
    })
}

/// Attaches each incorrect answer to its question. Answers whose question is
/// gone are dropped from the view.
pub fn group_answers(questions: Vec<Question>, answers: Vec<IncorrectAnswer>) -> Vec<QuestionView> {
    let mut by_question: HashMap<i64, Vec<String>> = HashMap::new();
    for answer in answers {
        by_question
            .entry(answer.question_id)
            .or_default()
            .push(answer.answer_text);
    }

    questions
        .into_iter()
        .map(|question| QuestionView {
            incorrect_answers: by_question.remove(&question.id).unwrap_or_default(),
            question,
        })
        .collect()
}


use crate::config::DatabaseConfig;
use crate::questions::{IncorrectAnswer, Question};
use crate::scores::Score;
use crate::users::UserSummary;
use anyhow::Context;
use serde::Serialize;
use sqlx::{Connection, MySqlConnection};
use std::collections::HashMap;
use tracing::debug;
