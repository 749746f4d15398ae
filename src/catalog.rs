//! Catalog queries: browse and search the stored profiles
//!
//! Read-only lookups that back a directory UI: list, substring search,
//! detail expansion and faceted lookups by role or tool. Everything returns
//! owned serializable DTOs so callers can hand results straight to a
//! serializer without holding the graph lock.

use crate::graph::{EmpId, Person, ProfileGraph};
use serde::Serialize;

/// Flat profile listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub emp_id: EmpId,
    pub name: String,
    pub role: String,
    pub grade: String,
    pub office: String,
    pub description: Option<String>,
}

impl ProfileSummary {
    fn from_person(person: &Person) -> Self {
        ProfileSummary {
            emp_id: person.emp_id.clone(),
            name: person.name.clone(),
            role: person.role.clone(),
            grade: person.grade.clone(),
            office: person.office.clone(),
            description: person.description.clone(),
        }
    }
}

/// One rated skill on a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillEntry {
    pub name: String,
    pub rating: u8,
}

/// Full profile view with playable roles and rated skills expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileDetail {
    #[serde(flatten)]
    pub summary: ProfileSummary,
    pub roles: Vec<String>,
    pub skills: Vec<SkillEntry>,
}

/// Listing entry carrying the rating of the tool that was queried.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedProfile {
    #[serde(flatten)]
    pub summary: ProfileSummary,
    pub rating: u8,
}

/// Read-only catalog view over a borrowed graph.
pub struct Catalog<'g> {
    graph: &'g ProfileGraph,
}

impl<'g> Catalog<'g> {
    pub fn new(graph: &'g ProfileGraph) -> Self {
        Self { graph }
    }

    /// All profiles in creation order.
    pub fn list_profiles(&self) -> Vec<ProfileSummary> {
        self.graph
            .persons()
            .map(ProfileSummary::from_person)
            .collect()
    }

    /// Case-insensitive substring search over name, role and description.
    pub fn search_profiles(&self, query: &str) -> Vec<ProfileSummary> {
        let needle = query.to_lowercase();
        self.graph
            .persons()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.role.to_lowercase().contains(&needle)
                    || p.description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .map(ProfileSummary::from_person)
            .collect()
    }

    /// Full profile detail; `None` for an unknown id.
    pub fn get_profile(&self, emp_id: &EmpId) -> Option<ProfileDetail> {
        let person = self.graph.person(emp_id)?;
        let roles = self.graph.roles_of(emp_id).to_vec();
        let skills = self
            .graph
            .skills_of(emp_id)
            .map(|skills| {
                skills
                    .iter()
                    .map(|(name, rating)| SkillEntry {
                        name: name.clone(),
                        rating: rating.value(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Some(ProfileDetail {
            summary: ProfileSummary::from_person(person),
            roles,
            skills,
        })
    }

    /// All role names, sorted.
    pub fn list_roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = self.graph.roles().map(|r| r.name.clone()).collect();
        roles.sort();
        roles
    }

    /// All tool names, sorted.
    pub fn list_tools(&self) -> Vec<String> {
        let mut tools: Vec<String> = self.graph.tools().map(|t| t.name.clone()).collect();
        tools.sort();
        tools
    }

    /// Profiles able to play a role, in creation order.
    pub fn profiles_by_role(&self, role: &str) -> Vec<ProfileSummary> {
        self.graph
            .role_members(role)
            .iter()
            .filter_map(|emp_id| self.graph.person(emp_id))
            .map(ProfileSummary::from_person)
            .collect()
    }

    /// Profiles skilled in a tool, highest rating first with stable ties.
    pub fn profiles_by_tool(&self, tool: &str) -> Vec<RatedProfile> {
        let mut profiles: Vec<RatedProfile> = self
            .graph
            .tool_users(tool)
            .iter()
            .filter_map(|(emp_id, rating)| {
                self.graph.person(emp_id).map(|person| RatedProfile {
                    summary: ProfileSummary::from_person(person),
                    rating: rating.value(),
                })
            })
            .collect();
        profiles.sort_by(|a, b| b.rating.cmp(&a.rating));
        profiles
    }
}
