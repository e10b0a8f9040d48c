//! Skill vocabulary — the single closed set of skill tags shared by questions,
//! candidate profiles, and job-derived skill sets.
//!
//! One enum, one keyword table. Question tagging, job-description extraction,
//! and candidate skill declarations all speak `SkillTag`, so the three can
//! never drift apart.

pub mod keywords;

use serde::{Deserialize, Serialize};

/// Closed skill vocabulary. Stored in Postgres as the `skill_tag` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_tag", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SkillTag {
    Python,
    Django,
    Javascript,
    React,
    Sql,
    Git,
    ProblemSolving,
    Communication,
    Leadership,
    Teamwork,
}

impl sqlx::postgres::PgHasArrayType for SkillTag {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_skill_tag")
    }
}

impl SkillTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillTag::Python => "python",
            SkillTag::Django => "django",
            SkillTag::Javascript => "javascript",
            SkillTag::React => "react",
            SkillTag::Sql => "sql",
            SkillTag::Git => "git",
            SkillTag::ProblemSolving => "problem_solving",
            SkillTag::Communication => "communication",
            SkillTag::Leadership => "leadership",
            SkillTag::Teamwork => "teamwork",
        }
    }
}

/// Ordinal question difficulty. Stored in Postgres as `difficulty_tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "difficulty_tier", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_tag_serializes_snake_case() {
        let json = serde_json::to_string(&SkillTag::ProblemSolving).unwrap();
        assert_eq!(json, r#""problem_solving""#);
    }

    #[test]
    fn test_skill_tag_round_trips_via_as_str() {
        for tag in [
            SkillTag::Python,
            SkillTag::Django,
            SkillTag::Javascript,
            SkillTag::React,
            SkillTag::Sql,
            SkillTag::Git,
            SkillTag::ProblemSolving,
            SkillTag::Communication,
            SkillTag::Leadership,
            SkillTag::Teamwork,
        ] {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
        }
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&DifficultyTier::Medium).unwrap();
        assert_eq!(json, r#""medium""#);
    }
}
