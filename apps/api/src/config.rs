use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Target number of questions per interview session. Must be > 0.
    pub question_count: i32,
    /// Optional fixed seed for question selection; unset means OS entropy.
    pub rng_seed: Option<u64>,
    /// Seed the question bank at startup (idempotent).
    pub seed_questions: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let question_count = std::env::var("INTERVIEW_QUESTION_COUNT")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<i32>()
            .context("INTERVIEW_QUESTION_COUNT must be an integer")?;
        if question_count <= 0 {
            bail!("INTERVIEW_QUESTION_COUNT must be greater than zero");
        }

        let rng_seed = match std::env::var("INTERVIEW_RNG_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("INTERVIEW_RNG_SEED must be a u64")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            question_count,
            rng_seed,
            seed_questions: std::env::var("SEED_QUESTIONS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
