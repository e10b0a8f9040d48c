use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::skills::{DifficultyTier, SkillTag};

/// Lifecycle of an interview session. `in_progress → completed` happens exactly
/// once; `cancelled` is terminal and set from outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "session_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
    Cancelled,
}

/// One practice question in the bank. Immutable reference data; seeded once,
/// read thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRow {
    pub id: Uuid,
    pub question_text: String,
    pub skill: SkillTag,
    pub difficulty: DifficultyTier,
    pub expected_answer: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One candidate's interview attempt for one job application.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub application_id: Uuid,
    pub status: SessionStatus,
    pub question_count: i32,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// One answered question within a session. Scores are 1–5; 0 means unscored.
/// At most one row per (session, question) — re-submission updates in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResponseRow {
    pub id: Uuid,
    pub session_id: Uuid,
    pub question_id: Uuid,
    pub candidate_answer: String,
    pub score: i16,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}
