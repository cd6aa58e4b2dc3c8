use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EthicaError;

/// Difficulty scale shared by categories and scenarios.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Comma-separated list of valid values, for error messages and help.
    #[must_use]
    pub fn expected() -> String {
        Self::ALL
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = EthicaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(EthicaError::InvalidFilter {
                field: "difficulty",
                value: s.to_string(),
                expected: Difficulty::expected(),
            }),
        }
    }
}

/// Philosophical approach. Closed set; unknown strings are rejected at
/// the normalizer / filter-parse boundaries.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "kebab-case")]
pub enum Philosophy {
    Utilitarianism,
    Deontology,
    VirtueEthics,
    CareEthics,
    Contractualism,
    Existentialism,
    Stoicism,
    Pragmatism,
}

impl Philosophy {
    pub const ALL: [Philosophy; 8] = [
        Philosophy::Utilitarianism,
        Philosophy::Deontology,
        Philosophy::VirtueEthics,
        Philosophy::CareEthics,
        Philosophy::Contractualism,
        Philosophy::Existentialism,
        Philosophy::Stoicism,
        Philosophy::Pragmatism,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Philosophy::Utilitarianism => "utilitarianism",
            Philosophy::Deontology => "deontology",
            Philosophy::VirtueEthics => "virtue-ethics",
            Philosophy::CareEthics => "care-ethics",
            Philosophy::Contractualism => "contractualism",
            Philosophy::Existentialism => "existentialism",
            Philosophy::Stoicism => "stoicism",
            Philosophy::Pragmatism => "pragmatism",
        }
    }

    #[must_use]
    pub fn expected() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Philosophy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Philosophy {
    type Err = EthicaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both kebab-case (file format) and snake_case (hand-typed).
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "utilitarianism" => Ok(Philosophy::Utilitarianism),
            "deontology" => Ok(Philosophy::Deontology),
            "virtue-ethics" => Ok(Philosophy::VirtueEthics),
            "care-ethics" => Ok(Philosophy::CareEthics),
            "contractualism" => Ok(Philosophy::Contractualism),
            "existentialism" => Ok(Philosophy::Existentialism),
            "stoicism" => Ok(Philosophy::Stoicism),
            "pragmatism" => Ok(Philosophy::Pragmatism),
            _ => Err(EthicaError::InvalidFilter {
                field: "philosophy",
                value: s.to_string(),
                expected: Philosophy::expected(),
            }),
        }
    }
}

/// Scenario complexity score.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Moderate,
    High,
}

impl Complexity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Moderate => "moderate",
            Complexity::High => "high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = EthicaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Complexity::Low),
            "moderate" | "medium" => Ok(Complexity::Moderate),
            "high" => Ok(Complexity::High),
            _ => Err(EthicaError::InvalidFilter {
                field: "complexity",
                value: s.to_string(),
                expected: "low, moderate, high".to_string(),
            }),
        }
    }
}

/// A normalized topic grouping. Read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnhancedCategory {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub difficulty: Difficulty,
    pub primary_philosophy: Philosophy,
    /// Ordered approaches; always contains at least the primary.
    pub approaches: Vec<Philosophy>,
    pub tags: BTreeSet<String>,
    /// Ids of owned scenarios, in catalog order.
    pub scenario_ids: Vec<String>,
}

/// A normalized exercise. Read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnhancedScenario {
    pub id: String,
    pub title: String,
    /// Weak back-reference; resolved against the owning snapshot.
    pub category_id: String,
    pub difficulty: Difficulty,
    pub leaning: Philosophy,
    pub estimated_minutes: u32,
    pub complexity: Complexity,
    pub tags: BTreeSet<String>,
}

impl EnhancedScenario {
    /// Whether this scenario carries every one of the given tags.
    #[must_use]
    pub fn has_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().all(|t| self.tags.contains(t.as_ref()))
    }
}
