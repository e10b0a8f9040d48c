//! Question bank filters — pure functions over a loaded question pool.
//!
//! The bank is small and read-only, so the store loads it once per request and
//! these filters narrow it down in memory. All randomness comes in through the
//! caller's `Rng` so selection is reproducible under a seeded generator.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use uuid::Uuid;

use crate::models::interview::QuestionRow;
use crate::skills::{DifficultyTier, SkillTag};

/// Questions whose skill tag is in `skills`. An empty skill set yields an
/// empty result.
pub fn questions_matching<'a>(
    pool: &[&'a QuestionRow],
    skills: &HashSet<SkillTag>,
) -> Vec<&'a QuestionRow> {
    pool.iter()
        .copied()
        .filter(|q| skills.contains(&q.skill))
        .collect()
}

/// Complement filter: questions whose id is NOT in `ids`. Used to drop
/// already-asked questions from a pool.
pub fn questions_excluding<'a>(
    pool: &[&'a QuestionRow],
    ids: &HashSet<Uuid>,
) -> Vec<&'a QuestionRow> {
    pool.iter()
        .copied()
        .filter(|q| !ids.contains(&q.id))
        .collect()
}

/// Narrows a pool to a single difficulty tier.
pub fn questions_by_difficulty<'a>(
    pool: &[&'a QuestionRow],
    tier: DifficultyTier,
) -> Vec<&'a QuestionRow> {
    pool.iter()
        .copied()
        .filter(|q| q.difficulty == tier)
        .collect()
}

/// Uniform random pick from a pool; `None` on an empty pool.
pub fn random_question<'a, R: Rng>(
    pool: &[&'a QuestionRow],
    rng: &mut R,
) -> Option<&'a QuestionRow> {
    pool.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_question(skill: SkillTag, difficulty: DifficultyTier) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            question_text: format!("{:?} {:?} question", skill, difficulty),
            skill,
            difficulty,
            expected_answer: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_matching_filters_by_skill() {
        let bank = vec![
            make_question(SkillTag::Python, DifficultyTier::Easy),
            make_question(SkillTag::Sql, DifficultyTier::Easy),
        ];
        let pool: Vec<&QuestionRow> = bank.iter().collect();
        let skills: HashSet<SkillTag> = [SkillTag::Python].into();

        let matched = questions_matching(&pool, &skills);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].skill, SkillTag::Python);
    }

    #[test]
    fn test_matching_with_empty_skill_set_is_empty() {
        let bank = vec![make_question(SkillTag::Python, DifficultyTier::Easy)];
        let pool: Vec<&QuestionRow> = bank.iter().collect();
        assert!(questions_matching(&pool, &HashSet::new()).is_empty());
    }

    #[test]
    fn test_excluding_drops_listed_ids() {
        let bank = vec![
            make_question(SkillTag::Git, DifficultyTier::Easy),
            make_question(SkillTag::Git, DifficultyTier::Hard),
        ];
        let pool: Vec<&QuestionRow> = bank.iter().collect();
        let asked: HashSet<Uuid> = [bank[0].id].into();

        let remaining = questions_excluding(&pool, &asked);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, bank[1].id);
    }

    #[test]
    fn test_by_difficulty_narrows_pool() {
        let bank = vec![
            make_question(SkillTag::Sql, DifficultyTier::Easy),
            make_question(SkillTag::Sql, DifficultyTier::Hard),
            make_question(SkillTag::Sql, DifficultyTier::Hard),
        ];
        let pool: Vec<&QuestionRow> = bank.iter().collect();

        let hard = questions_by_difficulty(&pool, DifficultyTier::Hard);
        assert_eq!(hard.len(), 2);
        assert!(hard.iter().all(|q| q.difficulty == DifficultyTier::Hard));
    }

    #[test]
    fn test_random_question_none_on_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_question(&[], &mut rng).is_none());
    }

    #[test]
    fn test_random_question_always_from_pool() {
        let bank: Vec<QuestionRow> = (0..5)
            .map(|_| make_question(SkillTag::React, DifficultyTier::Medium))
            .collect();
        let pool: Vec<&QuestionRow> = bank.iter().collect();
        let ids: HashSet<Uuid> = bank.iter().map(|q| q.id).collect();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = random_question(&pool, &mut rng).unwrap();
            assert!(ids.contains(&picked.id));
        }
    }
}
