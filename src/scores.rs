#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Score {
    pub user_email: String,
    pub score: i64,
}

impl Score {
    // The referenced user is not checked here; the schema's foreign key (if any) decides.
    pub async fn insert(&self, conn: &mut MySqlConnection) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO scores (user_email, score)
            VALUES (?, ?)
            "#,
        )
        .bind(&self.user_email)
        .bind(self.score)
        .execute(&mut *conn)
        .await
        .with_context(|| format!("Failed to insert score for user: {}", self.user_email))?;

        Ok(())
    }
}

use anyhow::Context;
use serde::Serialize;
use sqlx::FromRow;
use sqlx::MySqlConnection;
