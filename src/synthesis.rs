//! Description synthesizer
//!
//! Renders structured profile and demand attributes into the natural-language
//! strings that get embedded. This is the only place text shape is decided:
//! embedding stability across runs depends on these functions being
//! deterministic for identical inputs, including the skill map's insertion
//! order (which is why callers hand over an `IndexMap` rather than a hash
//! map).

use crate::graph::SkillRating;
use chrono::NaiveDate;
use indexmap::IndexMap;

/// Render a profile's attributes into its embedding text.
///
/// Shape: `Can play roles: {r1, r2}. Skilled in {t1 (rating: n1), ...}.
/// {grade} level position in {office}.`
pub fn profile_description(
    can_play: &[String],
    skills: &IndexMap<String, SkillRating>,
    grade: &str,
    office: &str,
) -> String {
    let roles = can_play.join(", ");
    let tools = format_skills(skills);
    format!("Can play roles: {roles}. {tools} {grade} level position in {office}.")
}

/// Render a demand into its embedding text: the raw job description followed
/// by the position summary sentence.
pub fn demand_description(
    job_description: &str,
    grade: &str,
    role: &str,
    office: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> String {
    format!(
        "{job_description} Position is for a {grade} {role} in {office}, \
         from {start_date} to {end_date}."
    )
}

fn format_skills(skills: &IndexMap<String, SkillRating>) -> String {
    let entries = skills
        .iter()
        .map(|(tool, rating)| format!("{tool} (rating: {rating})"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Skilled in {entries}.")
}
