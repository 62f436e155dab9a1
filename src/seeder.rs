// src/seeder.rs

/// Rows written by one seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub questions: usize,
    pub incorrect_answers: usize,
    pub users: usize,
    pub scores: usize,
}

/// Replaces the contents of the four quiz tables with `data`.
///
/// The reset and every insert share one transaction: on any error the
/// transaction is rolled back and the tables keep their previous contents.
pub async fn seed_database(
    conn: &mut MySqlConnection,
    data: &SeedData,
) -> anyhow::Result<SeedSummary> {
    // Hash up front so a hashing failure never opens a transaction.
    let users = data
        .users
        .iter()
        .map(UserSeed::to_user)
        .collect::<anyhow::Result<Vec<_>>>()?;
    debug!(users = users.len(), "Hashed user passwords");

    let mut tx = conn
        .begin()
        .await
        .context("Failed to begin the seeding transaction")?;

    match write_seed_data(&mut tx, data, &users).await {
        Ok(summary) => {
            tx.commit()
                .await
                .context("Failed to commit the seeding transaction")?;
            Ok(summary)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!(error = %rollback_err, "Rollback after failed seed run also failed");
            }
            Err(e)
        }
    }
}

async fn write_seed_data(
    conn: &mut MySqlConnection,
    data: &SeedData,
    users: &[User],
) -> anyhow::Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    info!("Clearing existing quiz data");
    reset_tables(conn).await?;

    info!(count = data.questions.len(), "Inserting questions");
    for seed in &data.questions {
        let question_id = seed.to_new_question().insert(conn).await?;
        debug!(question_id, question = seed.question, "Inserted question");
        summary.questions += 1;

        for wrong in seed.incorrect_answers {
            insert_incorrect_answer(conn, question_id, wrong).await?;
            summary.incorrect_answers += 1;
        }
    }

    info!(count = users.len(), "Inserting users");
    for user in users {
        user.insert(conn).await?;
        debug!(email = %user.email, is_admin = user.is_admin, "Inserted user");
        summary.users += 1;
    }

    info!(count = data.scores.len(), "Inserting scores");
    for seed in &data.scores {
        seed.to_score().insert(conn).await?;
        summary.scores += 1;
    }

    Ok(summary)
}

/// Clears the four quiz tables without inserting anything.
pub async fn reset_database(conn: &mut MySqlConnection) -> anyhow::Result<()> {
    let mut tx = conn
        .begin()
        .await
        .context("Failed to begin the reset transaction")?;

    // Dropping `tx` on error rolls it back.
    reset_tables(&mut tx).await?;

    tx.commit()
        .await
        .context("Failed to commit the reset transaction")?;
    Ok(())
}


use crate::db::reset_tables;
use crate::questions::insert_incorrect_answer;
use crate::seed_data::{SeedData, UserSeed};
use crate::users::User;
use anyhow::Context;
use serde::Serialize;
use sqlx::{Connection, MySqlConnection};
use tracing::{debug, info, warn};
