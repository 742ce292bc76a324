//! Session user record and role enum.
//!
//! # Responsibility
//! - Define the current-user shape held by the session service.
//! - Provide the shallow-merge patch applied by profile updates.
//!
//! # Invariants
//! - `role` is immutable post-creation; `UserPatch` cannot carry it.
//! - The password never appears on `User`; credentials live in the
//!   session-layer store only.

use serde::{Deserialize, Serialize};

/// Sequential decimal-string id shared by every entity in the portal.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = String;

/// Role assigned at account creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Portal administrator with access to verification workflows.
    Admin,
    /// Regular graduated-user account.
    Alumni,
}

/// Current-user record exposed by the session service.
///
/// Profile fields are optional because admin accounts and freshly registered
/// accounts carry only a subset of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub avatar: Option<String>,
    pub batch: Option<String>,
    pub department: Option<String>,
    pub company: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub roll_number: Option<String>,
    pub graduation_year: Option<String>,
    pub degree: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub is_verified: Option<bool>,
    pub created_at: String,
}

impl User {
    /// Creates a minimal user with empty profile fields.
    pub fn new(
        id: impl Into<EntityId>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: UserRole,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role,
            avatar: None,
            batch: None,
            department: None,
            company: None,
            designation: None,
            phone: None,
            roll_number: None,
            graduation_year: None,
            degree: None,
            skills: Vec::new(),
            bio: None,
            location: None,
            linkedin: None,
            github: None,
            is_verified: None,
            created_at: created_at.into(),
        }
    }

    /// Applies a shallow merge: only fields present on the patch change.
    pub fn apply_patch(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(avatar) = &patch.avatar {
            self.avatar = Some(avatar.clone());
        }
        if let Some(batch) = &patch.batch {
            self.batch = Some(batch.clone());
        }
        if let Some(department) = &patch.department {
            self.department = Some(department.clone());
        }
        if let Some(company) = &patch.company {
            self.company = Some(company.clone());
        }
        if let Some(designation) = &patch.designation {
            self.designation = Some(designation.clone());
        }
        if let Some(phone) = &patch.phone {
            self.phone = Some(phone.clone());
        }
        if let Some(degree) = &patch.degree {
            self.degree = Some(degree.clone());
        }
        if let Some(skills) = &patch.skills {
            self.skills = skills.clone();
        }
        if let Some(bio) = &patch.bio {
            self.bio = Some(bio.clone());
        }
        if let Some(location) = &patch.location {
            self.location = Some(location.clone());
        }
        if let Some(linkedin) = &patch.linkedin {
            self.linkedin = Some(linkedin.clone());
        }
        if let Some(github) = &patch.github {
            self.github = Some(github.clone());
        }
    }
}

/// Partial profile update applied by `update_user`.
///
/// Identity fields (`id`, `email`, `role`, `created_at`) are intentionally
/// absent: they are fixed at account creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub batch: Option<String>,
    pub department: Option<String>,
    pub company: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub degree: Option<String>,
    pub skills: Option<Vec<String>>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}
