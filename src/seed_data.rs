// src/seed_data.rs

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSeed {
    pub question: &'static str,
    pub correct_answer: &'static str,
    pub incorrect_answers: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSeed {
    pub email: &'static str,
    pub password: &'static str,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSeed {
    pub user_email: &'static str,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    pub questions: Vec<QuestionSeed>,
    pub users: Vec<UserSeed>,
    pub scores: Vec<ScoreSeed>,
}

impl QuestionSeed {
    pub fn to_new_question(&self) -> NewQuestion {
        NewQuestion {
            question_text: self.question.to_string(),
            correct_answer: self.correct_answer.to_string(),
        }
    }
}

impl UserSeed {
    pub fn to_user(&self) -> anyhow::Result<User> {
        User::with_password(self.email, self.password, self.is_admin)
    }
}

impl ScoreSeed {
    pub fn to_score(&self) -> Score {
        Score {
            user_email: self.user_email.trim().to_string(),
            score: self.score,
        }
    }
}

/// The fixed sample data every seed run writes.
pub fn sample_data() -> SeedData {
    SeedData {
        questions: vec![
            QuestionSeed {
                question: "The Apostle Paul's first letter in the New Testament is to the Galatians.",
                correct_answer: "False",
                incorrect_answers: &["True"],
            },
            QuestionSeed {
                question: "King Ahab's wife was Jezebel.",
                correct_answer: "True",
                incorrect_answers: &["False"],
            },
        ],
        users: vec![
            UserSeed {
                email: "test@example.com",
                password: "test1234",
                is_admin: false,
            },
            UserSeed {
                email: "msuryaprasad11@gmail.com",
                password: "Admin123",
                is_admin: true,
            },
        ],
        scores: vec![ScoreSeed {
            user_email: "test@example.com",
            score: 100,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_two_questions_two_users_one_score() {
        let data = sample_data();
        assert_eq!(data.questions.len(), 2);
        assert_eq!(data.users.len(), 2);
        assert_eq!(data.scores.len(), 1);
    }

    #[test]
    fn correct_answer_is_never_listed_as_incorrect() {
        for q in sample_data().questions {
            assert!(!q.incorrect_answers.is_empty(), "{}", q.question);
            assert!(!q.incorrect_answers.contains(&q.correct_answer), "{}", q.question);
        }
    }

    #[test]
    fn exactly_one_admin() {
        let admins = sample_data().users.iter().filter(|u| u.is_admin).count();
        assert_eq!(admins, 1);
    }

    #[test]
    fn score_belongs_to_the_non_admin_user() {
        let data = sample_data();
        let score = &data.scores[0];
        let owner = data
            .users
            .iter()
            .find(|u| u.email.trim() == score.user_email)
            .expect("score references a seeded user");

        assert!(!owner.is_admin);
        assert_eq!(score.score, 100);
    }

    #[test]
    fn question_seed_maps_to_row() {
        let q = &sample_data().questions[1];
        let row = q.to_new_question();
        assert_eq!(row.question_text, "King Ahab's wife was Jezebel.");
        assert_eq!(row.correct_answer, "True");
    }
}

use crate::questions::NewQuestion;
use crate::scores::Score;
use crate::users::User;
