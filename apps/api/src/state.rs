use sqlx::PgPool;

use crate::config::Config;
use crate::rng::SharedRng;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Injectable randomness source for question selection. Seed via
    /// `INTERVIEW_RNG_SEED` for reproducible selection.
    pub rng: SharedRng,
}
