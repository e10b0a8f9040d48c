//! Job-skill extraction — maps free job title/description text onto `SkillTag`s
//! via one shared keyword table.
//!
//! A tag is present when any of its keywords appears as a substring of the
//! case-folded title + description. Zero hits never yield an empty set: the
//! engine needs at least one job skill to keep its prioritization signal, so
//! extraction falls back to `{problem_solving, communication}`.

use std::collections::HashSet;

use super::SkillTag;

/// The shared keyword lookup table. All substring matching against job text
/// goes through this one table.
pub const SKILL_KEYWORDS: &[(SkillTag, &[&str])] = &[
    (SkillTag::Python, &["python", "django", "flask", "fastapi"]),
    (SkillTag::Django, &["django"]),
    (
        SkillTag::Javascript,
        &["javascript", "js", "react", "vue", "angular", "node"],
    ),
    (SkillTag::React, &["react"]),
    (
        SkillTag::Sql,
        &["sql", "database", "mysql", "postgresql", "mongodb"],
    ),
    (SkillTag::Git, &["git", "github", "version control"]),
    (
        SkillTag::ProblemSolving,
        &["problem solving", "algorithms", "debugging"],
    ),
    (
        SkillTag::Communication,
        &["communication", "presentation", "teamwork"],
    ),
    (SkillTag::Leadership, &["leadership", "mentoring"]),
    (SkillTag::Teamwork, &["teamwork", "collaboration"]),
];

/// Extracts the advertised skill set from a job's title and description.
pub fn extract_job_skills(title: &str, description: &str) -> HashSet<SkillTag> {
    let text = format!("{} {}", title, description).to_lowercase();

    let mut found: HashSet<SkillTag> = SKILL_KEYWORDS
        .iter()
        .filter(|(_, kws)| kws.iter().any(|kw| text.contains(kw)))
        .map(|(tag, _)| *tag)
        .collect();

    // Default pair when nothing matches — the engine must never see an empty
    // job-skill set.
    if found.is_empty() {
        found.insert(SkillTag::ProblemSolving);
        found.insert(SkillTag::Communication);
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_title_includes_python() {
        let skills = extract_job_skills("Senior Python Django Developer", "");
        assert!(skills.contains(&SkillTag::Python));
        assert!(skills.contains(&SkillTag::Django));
    }

    #[test]
    fn test_no_hits_returns_exact_default_pair() {
        let skills = extract_job_skills("Account Manager", "");
        let expected: HashSet<SkillTag> =
            [SkillTag::ProblemSolving, SkillTag::Communication].into();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let skills = extract_job_skills("BACKEND ENGINEER", "Strong PostgreSQL and Git skills");
        assert!(skills.contains(&SkillTag::Sql));
        assert!(skills.contains(&SkillTag::Git));
    }

    #[test]
    fn test_description_text_is_also_matched() {
        let skills = extract_job_skills("Engineer", "We use React on the frontend");
        assert!(skills.contains(&SkillTag::React));
        assert!(skills.contains(&SkillTag::Javascript));
    }

    #[test]
    fn test_default_pair_not_added_when_any_tag_matches() {
        let skills = extract_job_skills("Git wizard", "");
        assert!(skills.contains(&SkillTag::Git));
        assert!(!skills.contains(&SkillTag::ProblemSolving));
    }

    #[test]
    fn test_every_tag_has_at_least_one_keyword() {
        for (tag, kws) in SKILL_KEYWORDS {
            assert!(!kws.is_empty(), "{:?} has no keywords", tag);
        }
    }
}
