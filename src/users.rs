#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl User {
    /// Builds a user row from plaintext credentials.
    ///
    /// The email is trimmed and the password is replaced by its salted hash;
    /// the plaintext never reaches the database.
    pub fn with_password(email: &str, password: &str, is_admin: bool) -> anyhow::Result<Self> {
        let password_hash = generate_password_hash(password)
            .with_context(|| format!("Failed to hash password for user: {}", email.trim()))?;

        Ok(User {
            email: email.trim().to_string(),
            password_hash,
            is_admin,
        })
    }

    pub async fn insert(&self, conn: &mut MySqlConnection) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, is_admin)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&self.email)
        .bind(&self.password_hash)
        .bind(self.is_admin)
        .execute(&mut *conn)
        .await
        .with_context(|| format!("Failed to insert user: {}", self.email))?;

        Ok(())
    }
}

/// What `check` reports about a user. The hash stays in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserSummary {
    pub email: String,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::check_password_hash;

    #[test]
    fn email_is_trimmed_and_password_hashed() {
        let user = User::with_password("  test@example.com \n", "test1234", false).unwrap();

        assert_eq!(user.email, "test@example.com");
        assert!(!user.is_admin);
        assert_ne!(user.password_hash, "test1234");
        assert!(check_password_hash(&user.password_hash, "test1234"));
    }
}

use crate::password::generate_password_hash;
use anyhow::Context;
use serde::Serialize;
use sqlx::FromRow;
use sqlx::MySqlConnection;
