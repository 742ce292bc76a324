//! Seeded deterministic bulk-alumni generation.
//!
//! # Responsibility
//! - Produce the generated directory tail (ids 11-55) reproducibly.
//!
//! # Invariants
//! - The same seed always produces identical records.
//! - Status distribution is weighted 3:1:1 verified/pending/rejected.
//! - `is_verified` mirrors `status == Verified` on every generated record.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::alumni::{Alumni, VerificationStatus};

/// First generated directory id.
pub const GENERATED_ID_START: u32 = 11;
/// Last generated directory id (inclusive).
pub const GENERATED_ID_END: u32 = 55;
/// Seed used by `alumni_data()` so every consumer sees the same directory.
pub const DEFAULT_SEED: u64 = 20240315;

const DEPARTMENTS: &[&str] = &[
    "Computer Science",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Chemical Engineering",
    "Information Technology",
    "Electronics",
];

const COMPANIES: &[&str] = &[
    "Google",
    "Microsoft",
    "Apple",
    "Amazon",
    "Meta",
    "Netflix",
    "Tesla",
    "NVIDIA",
    "Adobe",
    "Salesforce",
    "Oracle",
    "IBM",
    "Intel",
    "Cisco",
    "VMware",
];

const DESIGNATIONS: &[&str] = &[
    "Software Engineer",
    "Senior Developer",
    "Product Manager",
    "Data Scientist",
    "Team Lead",
    "Architect",
    "Consultant",
    "Manager",
];

const LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Seattle, WA",
    "Austin, TX",
    "Boston, MA",
    "Chicago, IL",
    "Denver, CO",
    "Los Angeles, CA",
];

// Three verified entries keep the original 3:1:1 weighting.
const STATUS_POOL: &[VerificationStatus] = &[
    VerificationStatus::Verified,
    VerificationStatus::Verified,
    VerificationStatus::Verified,
    VerificationStatus::Pending,
    VerificationStatus::Rejected,
];

fn pick<'a>(rng: &mut ChaCha8Rng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Generates the directory tail (ids 11-55) from the given seed.
pub fn generated_alumni(seed: u64) -> Vec<Alumni> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut alumni = Vec::with_capacity((GENERATED_ID_END - GENERATED_ID_START + 1) as usize);

    for id in GENERATED_ID_START..=GENERATED_ID_END {
        let batch = (2015 + rng.random_range(0..9u32)).to_string();
        let department = pick(&mut rng, DEPARTMENTS);
        let status = STATUS_POOL[rng.random_range(0..STATUS_POOL.len())];
        let company = pick(&mut rng, COMPANIES);
        let designation = pick(&mut rng, DESIGNATIONS);
        let location = pick(&mut rng, LOCATIONS);
        let degree = if rng.random_range(0..10u32) >= 7 {
            "M.Tech"
        } else {
            "B.Tech"
        };
        let month = rng.random_range(1..=3u32);
        let day = rng.random_range(1..=28u32);
        let dept_code = department.chars().take(2).collect::<String>().to_uppercase();

        alumni.push(Alumni {
            id: id.to_string(),
            name: format!("Alumni {id}"),
            email: format!("alumni{id}@example.com"),
            avatar: None,
            batch: batch.clone(),
            department: department.to_string(),
            company: company.to_string(),
            designation: designation.to_string(),
            phone: format!("+123456{id:04}"),
            roll_number: format!("{dept_code}{batch}{id:03}"),
            graduation_year: batch,
            degree: degree.to_string(),
            skills: vec![
                "Skill 1".to_string(),
                "Skill 2".to_string(),
                "Skill 3".to_string(),
            ],
            bio: format!("Professional with experience in {department}."),
            location: location.to_string(),
            linkedin: None,
            github: None,
            is_verified: status == VerificationStatus::Verified,
            status,
            registration_date: format!("2024-{month:02}-{day:02}"),
            experience: Vec::new(),
        });
    }

    alumni
}

#[cfg(test)]
mod tests {
    use super::{generated_alumni, GENERATED_ID_END, GENERATED_ID_START};

    #[test]
    fn same_seed_same_output() {
        assert_eq!(generated_alumni(7), generated_alumni(7));
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(generated_alumni(1), generated_alumni(2));
    }

    #[test]
    fn ids_cover_the_generated_range() {
        let alumni = generated_alumni(7);
        let expected: Vec<String> = (GENERATED_ID_START..=GENERATED_ID_END)
            .map(|id| id.to_string())
            .collect();
        let actual: Vec<String> = alumni.iter().map(|record| record.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn every_generated_record_validates() {
        for record in generated_alumni(7) {
            record.validate().unwrap();
        }
    }
}
