//! sqlx accessors for the interview tables. All engine inputs are loaded here;
//! the engine itself never touches the pool.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::interview::{QuestionRow, ResponseRow, SessionRow};
use crate::models::job::{ApplicationRow, CandidateProfileRow, JobRow};
use crate::skills::SkillTag;

/// Loads the entire question bank. The bank is reference data and small, so
/// selection filters it in memory.
pub async fn fetch_question_bank(pool: &PgPool) -> Result<Vec<QuestionRow>, sqlx::Error> {
    sqlx::query_as::<_, QuestionRow>(
        "SELECT * FROM interview_questions ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_question(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<QuestionRow>, sqlx::Error> {
    sqlx::query_as::<_, QuestionRow>("SELECT * FROM interview_questions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn fetch_session(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<SessionRow>, sqlx::Error> {
    sqlx::query_as::<_, SessionRow>("SELECT * FROM interview_sessions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Creates the session for a (candidate, application) pair, or returns the
/// existing one — the unique constraint guarantees at most one per pair, and
/// `ON CONFLICT DO NOTHING` keeps concurrent starts race-safe.
pub async fn get_or_create_session(
    pool: &PgPool,
    candidate_id: Uuid,
    application_id: Uuid,
    question_count: i32,
) -> Result<(SessionRow, bool), sqlx::Error> {
    let inserted = sqlx::query_as::<_, SessionRow>(
        r#"
        INSERT INTO interview_sessions (candidate_id, application_id, question_count)
        VALUES ($1, $2, $3)
        ON CONFLICT (candidate_id, application_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(candidate_id)
    .bind(application_id)
    .bind(question_count)
    .fetch_optional(pool)
    .await?;

    if let Some(session) = inserted {
        info!("Created interview session {} for application {application_id}", session.id);
        return Ok((session, true));
    }

    let existing = sqlx::query_as::<_, SessionRow>(
        "SELECT * FROM interview_sessions WHERE candidate_id = $1 AND application_id = $2",
    )
    .bind(candidate_id)
    .bind(application_id)
    .fetch_one(pool)
    .await?;

    Ok((existing, false))
}

pub async fn fetch_responses(
    pool: &PgPool,
    session_id: Uuid,
) -> Result<Vec<ResponseRow>, sqlx::Error> {
    sqlx::query_as::<_, ResponseRow>(
        "SELECT * FROM interview_responses WHERE session_id = $1 ORDER BY created_at, id",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await
}

/// Records an answer. At most one response per (session, question): a second
/// submission for the same question updates the first row in place
/// (last-write-wins), it never inserts a duplicate.
pub async fn upsert_response(
    pool: &PgPool,
    session_id: Uuid,
    question_id: Uuid,
    candidate_answer: &str,
    score: i16,
    feedback: Option<&str>,
) -> Result<ResponseRow, sqlx::Error> {
    sqlx::query_as::<_, ResponseRow>(
        r#"
        INSERT INTO interview_responses
            (session_id, question_id, candidate_answer, score, feedback)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (session_id, question_id) DO UPDATE
        SET candidate_answer = EXCLUDED.candidate_answer,
            score = EXCLUDED.score,
            feedback = EXCLUDED.feedback
        RETURNING *
        "#,
    )
    .bind(session_id)
    .bind(question_id)
    .bind(candidate_answer)
    .bind(score)
    .bind(feedback)
    .fetch_one(pool)
    .await
}

/// Transitions a session to `completed` and stamps the completion time.
/// Guarded on `in_progress`, so repeated calls (and calls on cancelled
/// sessions) are no-ops.
pub async fn complete_session(pool: &PgPool, session_id: Uuid) -> Result<(), sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE interview_sessions
        SET status = 'completed', completed_at = NOW()
        WHERE id = $1 AND status = 'in_progress'
        "#,
    )
    .bind(session_id)
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        info!("Interview session {session_id} completed");
    }
    Ok(())
}

pub async fn fetch_application(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn fetch_job(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Declared skills from the candidate's profile; a missing profile is an
/// empty skill set, not an error.
pub async fn fetch_candidate_skills(
    pool: &PgPool,
    candidate_id: Uuid,
) -> Result<Vec<SkillTag>, sqlx::Error> {
    let profile = sqlx::query_as::<_, CandidateProfileRow>(
        "SELECT * FROM candidate_profiles WHERE user_id = $1",
    )
    .bind(candidate_id)
    .fetch_optional(pool)
    .await?;
    Ok(profile.map(|p| p.skills).unwrap_or_default())
}
