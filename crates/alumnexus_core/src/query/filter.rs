//! Text search, categorical filter and status partition.
//!
//! # Responsibility
//! - Case-insensitive substring search over per-entity field sets.
//! - Exact-match categorical filtering with an `"all"` sentinel.
//! - Disjoint verification-status partitioning of alumni lists.
//!
//! # Invariants
//! - An empty query matches every record.
//! - Partition groups are pairwise disjoint and their union equals the
//!   input collection exactly.

use crate::model::alumni::{Alumni, VerificationStatus};
use crate::model::job::Job;

/// Categorical-filter sentinel meaning "no filtering".
pub const ALL: &str = "all";

/// Entities searchable by free text across a configured field set.
///
/// A record matches when ANY field contains the query as a
/// case-insensitive substring.
pub trait TextSearchable {
    /// Fields the text search runs over, in display-relevance order.
    fn search_fields(&self) -> Vec<&str>;
}

impl TextSearchable for Alumni {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.company]
    }
}

impl TextSearchable for Job {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.company.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }
}

/// Returns whether the record matches the query on any configured field.
pub fn matches_query<T: TextSearchable>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filters a slice by free-text query.
pub fn search<'a, T: TextSearchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_query(*record, query))
        .collect()
}

/// Exact-match filter on one categorical field; `"all"` disables it.
pub fn field_filter<'a, T>(
    records: &'a [T],
    selected: &str,
    field: impl Fn(&T) -> &str,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| selected == ALL || field(record) == selected)
        .collect()
}

/// Disjoint grouping of alumni by verification status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationPartition {
    pub pending: Vec<Alumni>,
    pub verified: Vec<Alumni>,
    pub rejected: Vec<Alumni>,
}

impl VerificationPartition {
    /// Total record count across all groups.
    pub fn len(&self) -> usize {
        self.pending.len() + self.verified.len() + self.rejected.len()
    }

    /// Returns whether every group is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions alumni into pending/verified/rejected groups.
///
/// No record is lost or duplicated: the union of the three groups equals
/// the input collection.
pub fn partition_by_status(alumni: &[Alumni]) -> VerificationPartition {
    let mut partition = VerificationPartition::default();
    for record in alumni {
        match record.status {
            VerificationStatus::Pending => partition.pending.push(record.clone()),
            VerificationStatus::Verified => partition.verified.push(record.clone()),
            VerificationStatus::Rejected => partition.rejected.push(record.clone()),
        }
    }
    partition
}
