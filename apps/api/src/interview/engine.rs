//! Interview engine — skill-prioritized, difficulty-adaptive question
//! selection plus final scoring and per-skill breakdown.
//!
//! All functions are pure over loaded rows: the store fetches the bank and the
//! session's responses, the engine decides. Expected conditions (empty bank,
//! exhausted bank) are values, never errors.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use uuid::Uuid;

use crate::interview::bank;
use crate::models::interview::{QuestionRow, ResponseRow};
use crate::skills::{DifficultyTier, SkillTag};

/// Maximum attainable score per question (5-point scale).
const MAX_SCORE_PER_QUESTION: f64 = 5.0;

/// Baseline average used when the running mean is undefined.
const BASELINE_AVG_SCORE: f64 = 3.0;

/// Outcome of a selection round.
#[derive(Debug, Clone, Copy)]
pub enum NextQuestion<'a> {
    /// A question not yet asked in this session.
    Fresh(&'a QuestionRow),
    /// Every question has already been asked; this is a repeat, drawn
    /// uniformly from the whole bank. Callers may surface it as "no more new
    /// questions".
    Repeat(&'a QuestionRow),
}

impl<'a> NextQuestion<'a> {
    pub fn question(&self) -> &'a QuestionRow {
        match *self {
            NextQuestion::Fresh(q) | NextQuestion::Repeat(q) => q,
        }
    }

    pub fn is_repeat(&self) -> bool {
        matches!(self, NextQuestion::Repeat(_))
    }
}

/// Selects the next question for a session.
///
/// Layered fallback, first non-empty pool wins:
/// 1. candidate ∩ job skills, minus already-asked
/// 2. job skills alone, minus already-asked
/// 3. anything not yet asked
/// 4. bank exhausted → uniform repeat over the whole bank
///
/// Pools 1–3 then go through difficulty adaptation driven by the session's
/// running average score. Returns `None` only when the bank itself is empty.
pub fn select_next_question<'a, R: Rng>(
    all_questions: &'a [QuestionRow],
    responses: &[ResponseRow],
    candidate_skills: &HashSet<SkillTag>,
    job_skills: &HashSet<SkillTag>,
    rng: &mut R,
) -> Option<NextQuestion<'a>> {
    if all_questions.is_empty() {
        return None;
    }

    let whole_bank: Vec<&QuestionRow> = all_questions.iter().collect();
    let asked: HashSet<Uuid> = responses.iter().map(|r| r.question_id).collect();
    let unasked = bank::questions_excluding(&whole_bank, &asked);

    let priority_skills: HashSet<SkillTag> = candidate_skills
        .intersection(job_skills)
        .copied()
        .collect();

    let pool = {
        let priority_pool = bank::questions_matching(&unasked, &priority_skills);
        if !priority_pool.is_empty() {
            priority_pool
        } else {
            let job_pool = bank::questions_matching(&unasked, job_skills);
            if !job_pool.is_empty() {
                job_pool
            } else {
                unasked
            }
        }
    };

    if pool.is_empty() {
        // Every question already asked: fall back to a repeat from the whole
        // bank. Non-empty by the guard above.
        return bank::random_question(&whole_bank, rng).map(NextQuestion::Repeat);
    }

    select_by_difficulty(&pool, responses, rng).map(NextQuestion::Fresh)
}

/// Picks from `pool` at the tier suggested by the session's performance so
/// far, walking down the preference ladder until a tier is populated.
fn select_by_difficulty<'a, R: Rng>(
    pool: &[&'a QuestionRow],
    responses: &[ResponseRow],
    rng: &mut R,
) -> Option<&'a QuestionRow> {
    let preferred: &[DifficultyTier] = if responses.is_empty() {
        // First question: start at medium.
        &[DifficultyTier::Medium]
    } else {
        let avg = average_score(responses);
        if avg >= 4.0 {
            &[DifficultyTier::Hard, DifficultyTier::Medium]
        } else if avg <= 2.0 {
            &[DifficultyTier::Easy, DifficultyTier::Medium]
        } else {
            &[DifficultyTier::Medium]
        }
    };

    for tier in preferred {
        let tiered = bank::questions_by_difficulty(pool, *tier);
        if let Some(q) = bank::random_question(&tiered, rng) {
            return Some(q);
        }
    }

    bank::random_question(pool, rng)
}

/// Running mean of this session's scores; baseline 3 when undefined.
fn average_score(responses: &[ResponseRow]) -> f64 {
    if responses.is_empty() {
        return BASELINE_AVG_SCORE;
    }
    let total: i64 = responses.iter().map(|r| i64::from(r.score)).sum();
    total as f64 / responses.len() as f64
}

/// Final session score as a percentage of the maximum attainable points.
/// Zero responses score 0.
pub fn compute_final_score(responses: &[ResponseRow]) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }
    let total: i64 = responses.iter().map(|r| i64::from(r.score)).sum();
    let max_possible = responses.len() as f64 * MAX_SCORE_PER_QUESTION;
    total as f64 / max_possible * 100.0
}

/// Mean score per skill tag over the session's responses. Skills never asked
/// about are absent, not zero-filled. Responses to questions missing from the
/// bank are skipped.
pub fn skill_breakdown(
    all_questions: &[QuestionRow],
    responses: &[ResponseRow],
) -> HashMap<SkillTag, f64> {
    let skill_of: HashMap<Uuid, SkillTag> =
        all_questions.iter().map(|q| (q.id, q.skill)).collect();

    let mut scores: HashMap<SkillTag, Vec<i16>> = HashMap::new();
    for response in responses {
        if let Some(skill) = skill_of.get(&response.question_id) {
            scores.entry(*skill).or_default().push(response.score);
        }
    }

    scores
        .into_iter()
        .map(|(skill, scores)| {
            let mean =
                scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64;
            (skill, mean)
        })
        .collect()
}
