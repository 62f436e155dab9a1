/// Resets the quiz database and fills it with sample questions, users and scores.
///
/// Connection parameters come from MYSQL_HOST, MYSQL_PORT, MYSQL_USER,
/// MYSQL_PASSWORD and MYSQL_DB, optionally loaded from a `.env` file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The command to execute. Defaults to `seed`.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Deletes all quiz data and inserts the sample data in one transaction.
    Seed,

    /// Deletes all rows from the quiz tables without inserting anything.
    Reset,

    /// Shows what is currently stored in the quiz tables.
    #[command(alias = "c")]
    Check {
        /// Print the report as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- Environment & Logging ---
    let env_file = dotenvy::dotenv().ok();
    init_logging();
    if let Some(path) = env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    // --- Parse CLI commands ---
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Seed);

    // --- Database Setup ---
    let config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "Connecting to MySQL"
    );
    let mut conn = connect(&config).await?;

    let outcome = run(&mut conn, command).await;

    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close the database connection cleanly");
    }

    outcome
}

async fn run(conn: &mut MySqlConnection, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Seed => {
            let summary = seed_database(conn, &sample_data()).await?;
            info!(
                questions = summary.questions,
                incorrect_answers = summary.incorrect_answers,
                users = summary.users,
                scores = summary.scores,
                "Seed run committed"
            );
            println!("✅ MySQL database seeded successfully.");
        }
        Commands::Reset => {
            reset_database(conn).await?;
            println!("Quiz tables cleared.");
        }
        Commands::Check { json } => {
            let report = fetch_report(conn).await?;
            if json {
                println!("{}", render_report_json(&report)?);
            } else {
                print_report(&report);
            }
        }
    }

    Ok(())
}

/// The exact text `check --json` writes to stdout.
fn render_report_json(report: &DatabaseReport) -> anyhow::Result<String> {
    serde_json::to_string_pretty(report).context("Failed to render report as JSON")
}

fn print_report(report: &DatabaseReport) {
    let counts = &report.counts;
    println!("\n--- Row Counts ---");
    println!("  {:<18} {}", "questions", counts.questions);
    println!("  {:<18} {}", "incorrect_answers", counts.incorrect_answers);
    println!("  {:<18} {}", "users", counts.users);
    println!("  {:<18} {}", "scores", counts.scores);

    println!("\n--- Questions ---");
    if report.questions.is_empty() {
        println!("No questions found in the database. Run `seed` to populate it.");
    }
    for view in &report.questions {
        println!("  #{:<5} {}", view.question.id, view.question.question_text);
        println!("         Correct:   {}", view.question.correct_answer);
        println!("         Incorrect: {}", view.incorrect_answers.join(", "));
    }

    println!("\n--- Users ---");
    for user in &report.users {
        let role = if user.is_admin { "admin" } else { "user" };
        println!("  - {:<40} {}", user.email, role);
    }

    println!("\n--- Scores ---");
    for score in &report.scores {
        println!("  - {:<40} {}", score.user_email, score.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{QuestionView, TableCounts};
    use crate::questions::Question;
    use crate::scores::Score;
    use crate::users::UserSummary;

    #[test]
    fn no_subcommand_means_seed() {
        let cli = Cli::try_parse_from(["quiz-seed"]).unwrap();
        assert_eq!(cli.command.unwrap_or(Commands::Seed), Commands::Seed);
    }

    #[test]
    fn check_accepts_json_flag_and_alias() {
        let cli = Cli::try_parse_from(["quiz-seed", "check", "--json"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Check { json: true }));

        let cli = Cli::try_parse_from(["quiz-seed", "c"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Check { json: false }));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["quiz-seed", "migrate"]).is_err());
    }

    #[test]
    fn json_report_is_a_single_parseable_document() {
        let report = DatabaseReport {
            counts: TableCounts {
                questions: 1,
                incorrect_answers: 1,
                users: 1,
                scores: 1,
            },
            questions: vec![QuestionView {
                question: Question {
                    id: 4,
                    question_text: "King Ahab's wife was Jezebel.".to_string(),
                    correct_answer: "True".to_string(),
                },
                incorrect_answers: vec!["False".to_string()],
            }],
            users: vec![UserSummary {
                email: "test@example.com".to_string(),
                is_admin: false,
            }],
            scores: vec![Score {
                user_email: "test@example.com".to_string(),
                score: 100,
            }],
        };

        let rendered = render_report_json(&report).unwrap();
        assert!(rendered.starts_with('{'));
        assert!(rendered.ends_with('}'));

        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["counts"]["questions"], 1);
        assert_eq!(parsed["questions"][0]["question_text"], "King Ahab's wife was Jezebel.");
        assert_eq!(parsed["questions"][0]["incorrect_answers"][0], "False");
        assert_eq!(parsed["users"][0]["email"], "test@example.com");
        assert!(parsed["users"][0].get("password_hash").is_none());
        assert_eq!(parsed["scores"][0]["score"], 100);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

pub mod config;
pub mod db;
pub mod logging;
pub mod password;
pub mod questions;
pub mod scores;
pub mod seed_data;
pub mod seeder;
pub mod users;

use crate::config::DatabaseConfig;
use crate::db::{DatabaseReport, connect, fetch_report};
use crate::logging::init_logging;
use crate::seed_data::sample_data;
use crate::seeder::{reset_database, seed_database};
use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use sqlx::{Connection, MySqlConnection};
use tracing::{info, warn};
