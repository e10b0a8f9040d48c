//! Adaptive interview core: question bank filters, the selection/scoring
//! engine, the sqlx store, and the HTTP handlers that tie them together.

pub mod bank;
pub mod engine;
pub mod handlers;
pub mod seed;
pub mod store;
