//! Deterministic name, company, and email generation from curated lists.
//!
//! All generation is deterministic (same RNG seed = same names).

use crate::rng::GeneratorRng;

/// Deterministic name generator using curated vocabularies.
pub struct NameGenerator;

impl NameGenerator {
    /// Pick a first name from the curated list.
    pub fn first_name(rng: &mut GeneratorRng) -> &'static str {
        *rng.pick(Self::first_names())
    }

    /// Pick a last name from the curated list.
    pub fn last_name(rng: &mut GeneratorRng) -> &'static str {
        *rng.pick(Self::last_names())
    }

    /// Generate a company name: vocabulary name plus a legal-entity
    /// suffix ("Inc" or "Ltd", even odds).
    pub fn company(rng: &mut GeneratorRng) -> String {
        let base = rng.pick(Self::company_names());
        let suffix = if rng.chance(0.5) { "Inc" } else { "Ltd" };
        format!("{base} {suffix}")
    }

    /// Derive a syntactically valid, fully lower-case email address
    /// from a person's name and their company (whitespace stripped
    /// from the domain part).
    pub fn email(first: &str, last: &str, company: &str) -> String {
        let domain: String = company
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!(
            "{}.{}@{}.com",
            first.to_lowercase(),
            last.to_lowercase(),
            domain
        )
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Emma", "Liam", "Olivia", "Noah", "Ava", "Ethan", "Sophia", "Mason", "Isabella",
            "William", "Mia", "James", "Charlotte", "Benjamin", "Amelia", "Lucas", "Harper",
            "Henry", "Evelyn", "Alexander",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
            "Thomas", "Taylor", "Moore", "Jackson", "Martin",
        ]
    }

    fn company_names() -> &'static [&'static str] {
        &[
            "TechCorp", "InnoSoft", "DataFlow", "CloudSync", "NextGen", "PixelWorks",
            "CodeBase", "DevHub", "AppForge", "ByteStream", "LogicLab", "SyncFlow", "Quantum",
            "Nexus", "Vertex", "Zenith", "Horizon", "Catalyst", "Luminary", "Pinnacle",
        ]
    }
}
