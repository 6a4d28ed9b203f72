//! Phase status.
//!
//! JSON 上はただの文字列。既知の 3 値は enum に、それ以外は `Other` に
//! そのまま保持する（表示もフィルタも原文の文字列で行う）。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status of a roadmap phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhaseStatus {
    Todo,
    InProgress,
    Completed,
    /// Unrecognized status, kept verbatim.
    Other(String),
}

impl PhaseStatus {
    pub const TODO: &'static str = "todo";
    pub const IN_PROGRESS: &'static str = "in-progress";
    pub const COMPLETED: &'static str = "completed";

    pub fn parse(s: &str) -> Self {
        match s {
            Self::TODO => PhaseStatus::Todo,
            Self::IN_PROGRESS => PhaseStatus::InProgress,
            Self::COMPLETED => PhaseStatus::Completed,
            other => PhaseStatus::Other(other.to_string()),
        }
    }

    /// The exact string this status was read from.
    pub fn as_str(&self) -> &str {
        match self {
            PhaseStatus::Todo => Self::TODO,
            PhaseStatus::InProgress => Self::IN_PROGRESS,
            PhaseStatus::Completed => Self::COMPLETED,
            PhaseStatus::Other(s) => s,
        }
    }
}

impl From<&str> for PhaseStatus {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PhaseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PhaseStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::todo("todo", PhaseStatus::Todo)]
    #[case::in_progress("in-progress", PhaseStatus::InProgress)]
    #[case::completed("completed", PhaseStatus::Completed)]
    #[case::unknown("blocked", PhaseStatus::Other("blocked".into()))]
    #[case::case_sensitive("Todo", PhaseStatus::Other("Todo".into()))]
    fn parses_known_and_unknown(#[case] raw: &str, #[case] expected: PhaseStatus) {
        assert_eq!(PhaseStatus::parse(raw), expected);
        assert_eq!(expected.as_str(), raw);
    }

    #[test]
    fn deserializes_from_plain_string() {
        let st: PhaseStatus = serde_json::from_str(r#""on-hold""#).unwrap();
        assert_eq!(st, PhaseStatus::Other("on-hold".into()));
        assert_eq!(serde_json::to_string(&st).unwrap(), r#""on-hold""#);
    }
}
