//! Risk classification for failure modes

use std::fmt;

/// Ordered probability scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProbabilityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ProbabilityLevel {
    pub const ALL: [ProbabilityLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

/// Ordered impact scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImpactLevel {
    Minor,
    Moderate,
    Major,
    Severe,
}

impl ImpactLevel {
    pub const ALL: [ImpactLevel; 4] = [Self::Minor, Self::Moderate, Self::Major, Self::Severe];

    pub fn label(self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Moderate => "Moderate",
            Self::Major => "Major",
            Self::Severe => "Severe",
        }
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

/// Derived risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 5 => Self::Critical,
            s if s >= 3 => Self::High,
            s if s >= 1 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Risk", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: i32,
    pub level: RiskLevel,
}

impl RiskAssessment {
    /// Score two free-form labels. A label missing from its scale counts as -1.
    pub fn from_labels(probability: &str, impact: &str) -> Self {
        let probability = ProbabilityLevel::parse(probability).map_or(-1, ProbabilityLevel::index);
        let impact = ImpactLevel::parse(impact).map_or(-1, ImpactLevel::index);
        Self::from_score(probability + impact)
    }

    fn from_score(score: i32) -> Self {
        Self {
            score,
            level: RiskLevel::from_score(score),
        }
    }
}
