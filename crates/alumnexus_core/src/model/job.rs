//! Job posting record.
//!
//! # Invariants
//! - `applications_count` is static display data in this slice; applying
//!   through the job service never changes it.
//! - `posted_by` is a denormalized foreign key (`"admin"` or a user id)
//!   with no referential-integrity enforcement.

use serde::{Deserialize, Serialize};

use crate::model::user::EntityId;

/// Employment arrangement offered by a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
    Contract,
}

impl JobType {
    /// Stable wire value, also used as the categorical-filter key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Internship => "internship",
            Self::Contract => "contract",
        }
    }
}

/// Posting lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    Closed,
}

/// Job posting visible on the jobs board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: EntityId,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub experience: String,
    pub skills: Vec<String>,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_by: String,
    pub posted_by_name: String,
    pub application_deadline: String,
    pub applications_count: u32,
    pub status: JobStatus,
    pub created_at: String,
}
