//! Idempotent question-bank seeding. Inserts are keyed by question text, so
//! re-running against an already-seeded database is a no-op.

use sqlx::PgPool;
use tracing::info;

use crate::skills::{DifficultyTier, SkillTag};

struct SeedQuestion {
    text: &'static str,
    skill: SkillTag,
    difficulty: DifficultyTier,
    expected_answer: &'static str,
}

const SEED_QUESTIONS: &[SeedQuestion] = &[
    SeedQuestion {
        text: "Explain what a variable is in Python and give an example.",
        skill: SkillTag::Python,
        difficulty: DifficultyTier::Easy,
        expected_answer: "A variable is a container for storing data values. Example: x = 5",
    },
    SeedQuestion {
        text: "What is the difference between a list and a tuple in Python?",
        skill: SkillTag::Python,
        difficulty: DifficultyTier::Medium,
        expected_answer:
            "Lists are mutable (can be changed), tuples are immutable (cannot be changed).",
    },
    SeedQuestion {
        text: "Explain Django's MTV architecture.",
        skill: SkillTag::Django,
        difficulty: DifficultyTier::Medium,
        expected_answer:
            "Model-Template-View: Model handles data, Template handles presentation, View handles logic.",
    },
    SeedQuestion {
        text: "What is the purpose of React's useState hook?",
        skill: SkillTag::React,
        difficulty: DifficultyTier::Medium,
        expected_answer: "useState allows functional components to have state variables.",
    },
    SeedQuestion {
        text: "Write a SQL query to find employees with salary > 50000.",
        skill: SkillTag::Sql,
        difficulty: DifficultyTier::Easy,
        expected_answer: "SELECT * FROM employees WHERE salary > 50000;",
    },
    SeedQuestion {
        text: "Describe how you would approach solving a complex coding problem.",
        skill: SkillTag::ProblemSolving,
        difficulty: DifficultyTier::Medium,
        expected_answer:
            "Break down the problem, identify inputs/outputs, consider edge cases, write pseudocode, implement and test.",
    },
    SeedQuestion {
        text: "How do you handle conflicts within a development team?",
        skill: SkillTag::Communication,
        difficulty: DifficultyTier::Medium,
        expected_answer:
            "Listen to all sides, find common ground, focus on solutions, involve mediator if needed.",
    },
    SeedQuestion {
        text: "What is version control and why is it important?",
        skill: SkillTag::Git,
        difficulty: DifficultyTier::Easy,
        expected_answer:
            "Version control tracks changes to code over time. Important for collaboration, backup, and tracking project history.",
    },
    SeedQuestion {
        text: "Explain the concept of responsive web design.",
        skill: SkillTag::Javascript,
        difficulty: DifficultyTier::Medium,
        expected_answer:
            "Responsive design makes websites adapt to different screen sizes using CSS media queries, flexible layouts, and responsive images.",
    },
    SeedQuestion {
        text: "How would you optimize a slow database query?",
        skill: SkillTag::Sql,
        difficulty: DifficultyTier::Hard,
        expected_answer:
            "Check execution plan, add indexes, optimize joins, limit results, use proper data types, consider query restructuring.",
    },
    SeedQuestion {
        text: "Describe a challenging project you worked on and how you overcame difficulties.",
        skill: SkillTag::Leadership,
        difficulty: DifficultyTier::Medium,
        expected_answer:
            "Should describe a specific project, challenges faced, solutions implemented, and lessons learned.",
    },
    SeedQuestion {
        text: "How do you stay updated with new technologies and industry trends?",
        skill: SkillTag::Teamwork,
        difficulty: DifficultyTier::Easy,
        expected_answer:
            "Follow tech blogs, attend conferences, participate in online communities, take courses, work on personal projects.",
    },
];

/// Seeds the question bank. Returns the number of newly inserted questions.
pub async fn seed_questions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut created = 0u64;

    for q in SEED_QUESTIONS {
        let result = sqlx::query(
            r#"
            INSERT INTO interview_questions (question_text, skill, difficulty, expected_answer)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (question_text) DO NOTHING
            "#,
        )
        .bind(q.text)
        .bind(q.skill)
        .bind(q.difficulty)
        .bind(q.expected_answer)
        .execute(pool)
        .await?;
        created += result.rows_affected();
    }

    info!("Seeded {created} interview questions ({} total in seed set)", SEED_QUESTIONS.len());
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_set_is_nonempty() {
        assert!(!SEED_QUESTIONS.is_empty());
    }

    #[test]
    fn test_seed_texts_are_unique_and_nonblank() {
        let mut seen = HashSet::new();
        for q in SEED_QUESTIONS {
            assert!(!q.text.trim().is_empty());
            assert!(seen.insert(q.text), "duplicate seed question: {}", q.text);
        }
    }

    #[test]
    fn test_seed_set_covers_multiple_tiers() {
        let tiers: HashSet<_> = SEED_QUESTIONS.iter().map(|q| q.difficulty).collect();
        assert!(tiers.contains(&DifficultyTier::Easy));
        assert!(tiers.contains(&DifficultyTier::Medium));
        assert!(tiers.contains(&DifficultyTier::Hard));
    }
}
