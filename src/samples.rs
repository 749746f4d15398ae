//! Built-in seed dataset
//!
//! A small cross-section of employee profiles and staffing demands used by
//! the demo binary and the integration tests. Employee ids intentionally
//! have gaps, matching a directory where people have left.

use crate::ingest::{DemandRecord, ProfileRecord};
use chrono::NaiveDate;

/// Role vocabulary seeded before any profile ingest.
pub const ROLES: &[&str] = &[
    "Data Scientist",
    "Machine Learning Engineer",
    "Software Engineer",
    "Backend Developer",
    "Data Analyst",
    "Business Analyst",
    "Frontend Developer",
    "UX Designer",
    "UI Designer",
    "Data Engineer",
    "AI Researcher",
];

/// Tool vocabulary seeded before any profile ingest.
pub const TOOLS: &[&str] = &[
    "Python",
    "R",
    "TensorFlow",
    "PyTorch",
    "Scikit-learn",
    "Java",
    "SQL",
    "Excel",
    "Spark",
    "AWS",
    "Hadoop",
    "Tableau",
    "JavaScript",
    "React",
    "Figma",
    "Photoshop",
    "Sketch",
    "Illustrator",
    "HTML/CSS",
];

fn profile(
    emp_id: &str,
    name: &str,
    role: &str,
    grade: &str,
    office: &str,
    can_play: &[&str],
    tools: &[(&str, u8)],
) -> ProfileRecord {
    ProfileRecord {
        emp_id: emp_id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        grade: grade.to_string(),
        office: office.to_string(),
        can_play: can_play.iter().map(|r| r.to_string()).collect(),
        tools: tools
            .iter()
            .map(|(t, rating)| (t.to_string(), *rating))
            .collect(),
    }
}

/// Sample employee profiles.
pub fn employees() -> Vec<ProfileRecord> {
    vec![
        profile(
            "001",
            "Alice",
            "Data Scientist",
            "Senior",
            "New York",
            &["Data Scientist", "Machine Learning Engineer"],
            &[("Python", 5), ("R", 4), ("TensorFlow", 3)],
        ),
        profile(
            "002",
            "Bob",
            "Software Engineer",
            "Mid",
            "San Francisco",
            &["Software Engineer", "Backend Developer"],
            &[("Java", 4), ("Python", 3), ("SQL", 5)],
        ),
        profile(
            "003",
            "Charlie",
            "Data Analyst",
            "Junior",
            "New York",
            &["Data Analyst", "Business Analyst"],
            &[("Excel", 5), ("SQL", 4), ("Python", 2)],
        ),
        profile(
            "007",
            "Grace",
            "Machine Learning Engineer",
            "Lead",
            "New York",
            &["Machine Learning Engineer", "Data Scientist", "AI Researcher"],
            &[
                ("Python", 5),
                ("TensorFlow", 5),
                ("PyTorch", 4),
                ("Scikit-learn", 5),
                ("SQL", 3),
            ],
        ),
        profile(
            "009",
            "Isabel",
            "UX Designer",
            "Mid",
            "Austin",
            &["UX Designer", "UI Designer"],
            &[
                ("Figma", 5),
                ("Photoshop", 4),
                ("Sketch", 3),
                ("HTML/CSS", 3),
            ],
        ),
        profile(
            "013",
            "Mia",
            "Data Engineer",
            "Senior",
            "Seattle",
            &["Data Engineer", "Data Scientist"],
            &[
                ("Python", 5),
                ("SQL", 5),
                ("Spark", 4),
                ("AWS", 4),
                ("Hadoop", 3),
            ],
        ),
        profile(
            "019",
            "Sophia",
            "UI Designer",
            "Senior",
            "New York",
            &["UI Designer", "UX Designer"],
            &[
                ("Figma", 5),
                ("Photoshop", 5),
                ("Illustrator", 5),
                ("HTML/CSS", 4),
            ],
        ),
        profile(
            "021",
            "Uma",
            "Data Scientist",
            "Mid",
            "Singapore",
            &["Data Scientist", "Data Analyst"],
            &[
                ("Python", 4),
                ("R", 3),
                ("SQL", 4),
                ("Tableau", 4),
                ("Scikit-learn", 3),
            ],
        ),
    ]
}

/// Sample staffing demands.
pub fn demands() -> Vec<DemandRecord> {
    vec![
        DemandRecord {
            role: "Data Scientist".to_string(),
            grade: "Senior".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2023, 6, 30).expect("valid date"),
            office: "New York".to_string(),
            job_description: "Looking for a data scientist with strong Python and machine learning skills."
                .to_string(),
        },
        DemandRecord {
            role: "Software Engineer".to_string(),
            grade: "Mid".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 2, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2023, 7, 31).expect("valid date"),
            office: "San Francisco".to_string(),
            job_description: "Need a software engineer proficient in Java and SQL.".to_string(),
        },
    ]
}

/// The walkthrough demand used by the demo binary.
pub fn ux_designer_demand() -> DemandRecord {
    DemandRecord {
        role: "UX Designer".to_string(),
        grade: "Senior".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2025, 9, 30).expect("valid date"),
        office: "New York".to_string(),
        job_description: "Looking for a UX Designer with strong skills in Figma, and Photoshop"
            .to_string(),
    }
}
