//! HTTP boundary for the interview core. Ownership and payload validation
//! happen here, before anything reaches the engine; the engine only ever sees
//! loaded rows.

use std::collections::{HashMap, HashSet};

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::{engine, store};
use crate::models::interview::{QuestionRow, ResponseRow, SessionRow, SessionStatus};
use crate::skills::keywords::extract_job_skills;
use crate::skills::{DifficultyTier, SkillTag};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CandidateQuery {
    pub candidate_id: Uuid,
}

/// Candidate-facing view of a question. The reference answer stays server-side
/// until results are requested.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: Uuid,
    pub question_text: String,
    pub skill: SkillTag,
    pub difficulty: DifficultyTier,
}

impl From<&QuestionRow> for QuestionView {
    fn from(q: &QuestionRow) -> Self {
        QuestionView {
            id: q.id,
            question_text: q.question_text.clone(),
            skill: q.skill,
            difficulty: q.difficulty,
        }
    }
}

#[derive(Deserialize)]
pub struct StartInterviewRequest {
    pub candidate_id: Uuid,
    pub application_id: Uuid,
}

#[derive(Serialize)]
pub struct StartInterviewResponse {
    pub session: SessionRow,
    pub created: bool,
}

/// POST /api/v1/interviews/start
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Json(req): Json<StartInterviewRequest>,
) -> Result<Json<StartInterviewResponse>, AppError> {
    let application = store::fetch_application(&state.db, req.application_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Application {} not found", req.application_id))
        })?;

    if application.candidate_id != req.candidate_id {
        return Err(AppError::Unauthorized);
    }

    let (session, created) = store::get_or_create_session(
        &state.db,
        req.candidate_id,
        req.application_id,
        state.config.question_count,
    )
    .await?;

    Ok(Json(StartInterviewResponse { session, created }))
}

#[derive(Serialize)]
pub struct NextQuestionResponse {
    pub question: Option<QuestionView>,
    /// Every question in the bank has been asked; `question` is a repeat.
    pub exhausted: bool,
    pub session_complete: bool,
    pub answered: usize,
    pub question_count: i32,
}

/// GET /api/v1/interviews/:id/next
pub async fn handle_next_question(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(params): Query<CandidateQuery>,
) -> Result<Json<NextQuestionResponse>, AppError> {
    let session = load_owned_session(&state, session_id, params.candidate_id).await?;

    if session.status == SessionStatus::Cancelled {
        return Err(AppError::Validation(format!(
            "Interview session {session_id} was cancelled"
        )));
    }

    let responses = store::fetch_responses(&state.db, session_id).await?;

    // Already complete (or quota just met): redirect-style read, no selection.
    if session.status == SessionStatus::Completed
        || responses.len() >= session.question_count as usize
    {
        store::complete_session(&state.db, session_id).await?;
        return Ok(Json(NextQuestionResponse {
            question: None,
            exhausted: false,
            session_complete: true,
            answered: responses.len(),
            question_count: session.question_count,
        }));
    }

    let bank = store::fetch_question_bank(&state.db).await?;
    if bank.is_empty() {
        return Err(AppError::NotFound(
            "The question bank is empty; no interview can be run".to_string(),
        ));
    }

    let (candidate_skills, job_skills) = load_skill_sets(&state, &session).await?;

    let picked = state.rng.with(|rng| {
        engine::select_next_question(&bank, &responses, &candidate_skills, &job_skills, rng)
    });

    // Non-empty bank always yields a question.
    let picked = picked.ok_or_else(|| {
        AppError::NotFound("The question bank is empty; no interview can be run".to_string())
    })?;

    Ok(Json(NextQuestionResponse {
        question: Some(picked.question().into()),
        exhausted: picked.is_repeat(),
        session_complete: false,
        answered: responses.len(),
        question_count: session.question_count,
    }))
}

#[derive(Deserialize)]
pub struct SubmitAnswerRequest {
    pub candidate_id: Uuid,
    pub question_id: Uuid,
    pub candidate_answer: String,
    /// Optional reviewer score on the 1–5 scale; omitted answers stay
    /// unscored (0).
    pub score: Option<i16>,
    pub feedback: Option<String>,
}

#[derive(Serialize)]
pub struct SubmitAnswerResponse {
    pub response: ResponseRow,
    pub session_complete: bool,
}

/// POST /api/v1/interviews/:id/answers
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, AppError> {
    if req.candidate_answer.trim().is_empty() {
        return Err(AppError::Validation("Answer text must not be blank".to_string()));
    }
    let score = match req.score {
        None => 0,
        Some(s) if (1..=5).contains(&s) => s,
        Some(s) => {
            return Err(AppError::Validation(format!(
                "Score must be between 1 and 5, got {s}"
            )))
        }
    };

    let session = load_owned_session(&state, session_id, req.candidate_id).await?;
    if session.status != SessionStatus::InProgress {
        return Err(AppError::Validation(format!(
            "Interview session {session_id} is no longer in progress"
        )));
    }

    store::fetch_question(&state.db, req.question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", req.question_id)))?;

    let response = store::upsert_response(
        &state.db,
        session_id,
        req.question_id,
        &req.candidate_answer,
        score,
        req.feedback.as_deref(),
    )
    .await?;

    let responses = store::fetch_responses(&state.db, session_id).await?;
    let session_complete = responses.len() >= session.question_count as usize;
    if session_complete {
        store::complete_session(&state.db, session_id).await?;
    }

    Ok(Json(SubmitAnswerResponse {
        response,
        session_complete,
    }))
}

#[derive(Serialize)]
pub struct AnswerDetail {
    pub question_text: String,
    pub skill: SkillTag,
    pub difficulty: DifficultyTier,
    pub candidate_answer: String,
    pub score: i16,
    pub expected_answer: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Serialize)]
pub struct InterviewResultsResponse {
    pub session_id: Uuid,
    pub status: SessionStatus,
    pub final_score: f64,
    pub skill_breakdown: HashMap<SkillTag, f64>,
    pub answers: Vec<AnswerDetail>,
}

/// GET /api/v1/interviews/:id/results
pub async fn handle_results(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(params): Query<CandidateQuery>,
) -> Result<Json<InterviewResultsResponse>, AppError> {
    let session = load_owned_session(&state, session_id, params.candidate_id).await?;
    let responses = store::fetch_responses(&state.db, session_id).await?;
    let bank = store::fetch_question_bank(&state.db).await?;

    // Quota met but the completion write lost a race somewhere: settle it now.
    if session.status == SessionStatus::InProgress
        && responses.len() >= session.question_count as usize
    {
        store::complete_session(&state.db, session_id).await?;
    }
    let status = match store::fetch_session(&state.db, session_id).await? {
        Some(s) => s.status,
        None => session.status,
    };

    let final_score = engine::compute_final_score(&responses);
    let skill_breakdown = engine::skill_breakdown(&bank, &responses);

    let by_id: HashMap<Uuid, &QuestionRow> = bank.iter().map(|q| (q.id, q)).collect();
    let answers = responses
        .iter()
        .filter_map(|r| {
            by_id.get(&r.question_id).map(|q| AnswerDetail {
                question_text: q.question_text.clone(),
                skill: q.skill,
                difficulty: q.difficulty,
                candidate_answer: r.candidate_answer.clone(),
                score: r.score,
                expected_answer: q.expected_answer.clone(),
                feedback: r.feedback.clone(),
            })
        })
        .collect();

    Ok(Json(InterviewResultsResponse {
        session_id,
        status,
        final_score,
        skill_breakdown,
        answers,
    }))
}

/// Resolves a session and checks that the acting candidate owns it. Every
/// handler goes through this before any engine work.
async fn load_owned_session(
    state: &AppState,
    session_id: Uuid,
    candidate_id: Uuid,
) -> Result<SessionRow, AppError> {
    let session = store::fetch_session(&state.db, session_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview session {session_id} not found")))?;

    if session.candidate_id != candidate_id {
        return Err(AppError::Unauthorized);
    }
    Ok(session)
}

/// Loads the candidate's declared skills and the job's advertised skills for
/// a session. Extraction guarantees a non-empty job-skill set.
async fn load_skill_sets(
    state: &AppState,
    session: &SessionRow,
) -> Result<(HashSet<SkillTag>, HashSet<SkillTag>), AppError> {
    let candidate_skills: HashSet<SkillTag> =
        store::fetch_candidate_skills(&state.db, session.candidate_id)
            .await?
            .into_iter()
            .collect();

    let application = store::fetch_application(&state.db, session.application_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Application {} not found", session.application_id))
        })?;
    let job = store::fetch_job(&state.db, application.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", application.job_id)))?;

    let job_skills = extract_job_skills(&job.title, &job.description);
    Ok((candidate_skills, job_skills))
}
