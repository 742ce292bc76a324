//! Alumni profile record with verification lifecycle.
//!
//! # Responsibility
//! - Define the directory-facing profile superset and its status enum.
//! - Provide lifecycle helpers for the pending -> verified/rejected flow.
//!
//! # Invariants
//! - `is_verified` is always equal to `status == Verified`.
//! - `Verified` and `Rejected` are terminal: transitions out of them are
//!   rejected by the lifecycle helpers (idempotent no-op at call sites).
//! - An `Experience` entry with `current == true` carries no `end_date`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::user::EntityId;

/// Admin verification state of an alumni profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Awaiting admin review.
    Pending,
    /// Approved by an admin. Terminal.
    Verified,
    /// Rejected by an admin. Terminal.
    Rejected,
}

/// One employment entry on an alumni profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: EntityId,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
}

/// Graduated-user profile record with verification status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alumni {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub batch: String,
    pub department: String,
    pub company: String,
    pub designation: String,
    pub phone: String,
    pub roll_number: String,
    pub graduation_year: String,
    pub degree: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub is_verified: bool,
    pub status: VerificationStatus,
    pub registration_date: String,
    pub experience: Vec<Experience>,
}

/// Validation failure for a persisted or generated alumni record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlumniValidationError {
    /// `is_verified` disagrees with `status`.
    VerifiedFlagMismatch {
        status: VerificationStatus,
        is_verified: bool,
    },
    /// A current experience entry carries an end date.
    CurrentExperienceHasEndDate { experience_id: EntityId },
}

impl Display for AlumniValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VerifiedFlagMismatch {
                status,
                is_verified,
            } => write!(
                f,
                "isVerified flag {is_verified} disagrees with status {status:?}"
            ),
            Self::CurrentExperienceHasEndDate { experience_id } => write!(
                f,
                "current experience entry {experience_id} must not carry an end date"
            ),
        }
    }
}

impl Error for AlumniValidationError {}

impl Alumni {
    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `VerifiedFlagMismatch` when `is_verified != (status == Verified)`.
    /// - `CurrentExperienceHasEndDate` for a current entry with an end date.
    pub fn validate(&self) -> Result<(), AlumniValidationError> {
        if self.is_verified != (self.status == VerificationStatus::Verified) {
            return Err(AlumniValidationError::VerifiedFlagMismatch {
                status: self.status,
                is_verified: self.is_verified,
            });
        }
        for entry in &self.experience {
            if entry.current && entry.end_date.is_some() {
                return Err(AlumniValidationError::CurrentExperienceHasEndDate {
                    experience_id: entry.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Marks a pending profile as verified. Returns whether a transition
    /// happened; verified/rejected records are left untouched.
    pub fn approve(&mut self) -> bool {
        if self.status != VerificationStatus::Pending {
            return false;
        }
        self.status = VerificationStatus::Verified;
        self.is_verified = true;
        true
    }

    /// Marks a pending profile as rejected. Returns whether a transition
    /// happened; verified/rejected records are left untouched.
    pub fn reject(&mut self) -> bool {
        if self.status != VerificationStatus::Pending {
            return false;
        }
        self.status = VerificationStatus::Rejected;
        self.is_verified = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Alumni, AlumniValidationError, Experience, VerificationStatus};

    fn sample(status: VerificationStatus) -> Alumni {
        Alumni {
            id: "1".to_string(),
            name: "John Smith".to_string(),
            email: "john@alumni.com".to_string(),
            avatar: None,
            batch: "2020".to_string(),
            department: "Computer Science".to_string(),
            company: "Google".to_string(),
            designation: "Software Engineer".to_string(),
            phone: "+1234567890".to_string(),
            roll_number: "CS2020001".to_string(),
            graduation_year: "2020".to_string(),
            degree: "B.Tech".to_string(),
            skills: vec!["Rust".to_string()],
            bio: "bio".to_string(),
            location: "San Francisco, CA".to_string(),
            linkedin: None,
            github: None,
            is_verified: status == VerificationStatus::Verified,
            status,
            registration_date: "2024-01-15".to_string(),
            experience: Vec::new(),
        }
    }

    #[test]
    fn approve_moves_pending_to_verified() {
        let mut alumni = sample(VerificationStatus::Pending);
        assert!(alumni.approve());
        assert_eq!(alumni.status, VerificationStatus::Verified);
        assert!(alumni.is_verified);
        alumni.validate().unwrap();
    }

    #[test]
    fn approve_is_noop_on_terminal_states() {
        let mut verified = sample(VerificationStatus::Verified);
        assert!(!verified.approve());
        assert_eq!(verified.status, VerificationStatus::Verified);

        let mut rejected = sample(VerificationStatus::Rejected);
        assert!(!rejected.approve());
        assert_eq!(rejected.status, VerificationStatus::Rejected);
        assert!(!rejected.is_verified);
    }

    #[test]
    fn validate_rejects_current_experience_with_end_date() {
        let mut alumni = sample(VerificationStatus::Verified);
        alumni.experience.push(Experience {
            id: "1".to_string(),
            company: "Google".to_string(),
            role: "Engineer".to_string(),
            start_date: "2022-06".to_string(),
            end_date: Some("2024-01".to_string()),
            current: true,
            description: "infra".to_string(),
        });

        let err = alumni.validate().unwrap_err();
        assert_eq!(
            err,
            AlumniValidationError::CurrentExperienceHasEndDate {
                experience_id: "1".to_string()
            }
        );
    }

    #[test]
    fn validate_rejects_flag_mismatch() {
        let mut alumni = sample(VerificationStatus::Pending);
        alumni.is_verified = true;
        assert!(matches!(
            alumni.validate(),
            Err(AlumniValidationError::VerifiedFlagMismatch { .. })
        ));
    }
}
