//! Ingestion pipeline: validate, synthesize, embed, write
//!
//! Every ingest runs the same sequence: validate the raw record, synthesize
//! the description text, call the embedding provider, then commit to the
//! graph in one write. A provider failure aborts before any mutation, so the
//! graph never holds a node whose embedding was lost in flight.

use crate::embed::EmbeddingProvider;
use crate::error::Result;
use crate::graph::{Demand, DemandId, EmpId, GraphError, Person, ProfileGraph, SkillRating};
use crate::synthesis;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;

/// Attempts at claiming a fresh id before giving up on a write conflict.
const ID_CONFLICT_RETRIES: usize = 3;

/// A raw employee profile as loaded from seed data.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRecord {
    pub emp_id: String,
    pub name: String,
    pub role: String,
    pub grade: String,
    pub office: String,
    pub can_play: Vec<String>,
    /// Tool name with its 1..=5 proficiency rating.
    pub tools: Vec<(String, u8)>,
}

/// A raw staffing demand.
#[derive(Debug, Clone, Deserialize)]
pub struct DemandRecord {
    pub role: String,
    pub grade: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub office: String,
    pub job_description: String,
}

/// A minimal externally submitted profile. The employee id and display name
/// are assigned at ingest.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProfile {
    pub role: String,
    pub grade: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub office: String,
    pub job_description: String,
}

/// Drives records through synthesis and embedding into the graph.
pub struct Ingestor<'p, P: EmbeddingProvider> {
    provider: &'p P,
}

impl<'p, P: EmbeddingProvider> Ingestor<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// Ingest a profile: rating validation happens before synthesis, and the
    /// embedding is fetched before the first graph mutation.
    pub async fn ingest_profile(
        &self,
        graph: &mut ProfileGraph,
        record: ProfileRecord,
    ) -> Result<EmpId> {
        let mut skills: IndexMap<String, SkillRating> = IndexMap::new();
        for (tool, rating) in &record.tools {
            skills.insert(tool.clone(), SkillRating::new(*rating)?);
        }

        let description = synthesis::profile_description(
            &record.can_play,
            &skills,
            &record.grade,
            &record.office,
        );
        let embedding = self.provider.embed(&description).await?;

        let emp_id = EmpId::new(record.emp_id);
        let person = Person {
            emp_id: emp_id.clone(),
            name: record.name,
            role: record.role,
            grade: record.grade,
            office: record.office,
            start_date: None,
            end_date: None,
            description: Some(description),
            embedding: Some(embedding),
        };
        graph.insert_person(person, record.can_play, skills)?;
        tracing::debug!(emp_id = %emp_id, "profile ingested");
        Ok(emp_id)
    }

    /// Ingest a demand under a freshly assigned id. The embedding is fetched
    /// once; only the id claim is retried when another writer wins the race.
    pub async fn ingest_demand(
        &self,
        graph: &mut ProfileGraph,
        record: DemandRecord,
    ) -> Result<DemandId> {
        let description = synthesis::demand_description(
            &record.job_description,
            &record.grade,
            &record.role,
            &record.office,
            record.start_date,
            record.end_date,
        );
        let embedding = self.provider.embed(&description).await?;

        // With exclusive access the max-scan already covers every stored id,
        // so the conflict arm only fires when writers race through a shared
        // store handle.
        let mut attempts = 0;
        loop {
            let id = graph.next_demand_id();
            let demand = Demand {
                id: id.clone(),
                role: record.role.clone(),
                grade: record.grade.clone(),
                start_date: record.start_date,
                end_date: record.end_date,
                office: record.office.clone(),
                job_description: record.job_description.clone(),
                description: Some(description.clone()),
                embedding: Some(embedding.clone()),
            };
            match graph.insert_demand(demand) {
                Ok(()) => {
                    tracing::debug!(demand = %id, "demand ingested");
                    return Ok(id);
                }
                Err(GraphError::DuplicateDemand(_)) if attempts < ID_CONFLICT_RETRIES => {
                    attempts += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Create a skeletal profile from an external submission: a fresh id, a
    /// placeholder name, the role as the single CAN_PLAY edge, the engagement
    /// window, and the given text embedded as the profile description.
    pub async fn create_profile(
        &self,
        graph: &mut ProfileGraph,
        submission: NewProfile,
    ) -> Result<Person> {
        if submission.end_date < submission.start_date {
            return Err(GraphError::InvalidDateRange {
                start: submission.start_date,
                end: submission.end_date,
            }
            .into());
        }
        let embedding = self.provider.embed(&submission.job_description).await?;

        // Same conflict-arm reachability as in ingest_demand.
        let mut attempts = 0;
        loop {
            let emp_id = graph.next_emp_id();
            let person = Person {
                emp_id: emp_id.clone(),
                name: format!("Profile {emp_id}"),
                role: submission.role.clone(),
                grade: submission.grade.clone(),
                office: submission.office.clone(),
                start_date: Some(submission.start_date),
                end_date: Some(submission.end_date),
                description: Some(submission.job_description.clone()),
                embedding: Some(embedding.clone()),
            };
            match graph.insert_person(person, vec![submission.role.clone()], IndexMap::new()) {
                Ok(()) => {
                    tracing::debug!(emp_id = %emp_id, "profile created");
                    // Inserted above, the lookup cannot miss.
                    return Ok(graph
                        .person(&emp_id)
                        .cloned()
                        .ok_or(GraphError::PersonNotFound(emp_id))?);
                }
                Err(GraphError::DuplicatePerson(_)) if attempts < ID_CONFLICT_RETRIES => {
                    attempts += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
