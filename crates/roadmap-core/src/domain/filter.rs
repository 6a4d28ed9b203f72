//! Status filter.

use std::fmt;

use super::roadmap::Phase;

/// Either every phase or only the phases whose status string matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(String),
}

impl StatusFilter {
    pub const ALL: &'static str = "all";

    /// `"all"` maps to [`StatusFilter::All`]; anything else is an exact status match.
    pub fn parse(s: &str) -> Self {
        if s == Self::ALL {
            StatusFilter::All
        } else {
            StatusFilter::Status(s.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => Self::ALL,
            StatusFilter::Status(s) => s,
        }
    }

    /// Case-sensitive, no normalization.
    pub fn matches(&self, phase: &Phase) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(s) => phase.status.as_str() == s,
        }
    }

    /// Keeps source order.
    pub fn apply<'a>(&self, phases: &'a [Phase]) -> Vec<&'a Phase> {
        phases.iter().filter(|p| self.matches(p)).collect()
    }
}

impl From<&str> for StatusFilter {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
