//! Roadmap document: phases and their tasks.
//!
//! Loaded once and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::progress::completion_percent;
use super::status::PhaseStatus;

/// Root of `roadmap.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapDocument {
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl RoadmapDocument {
    pub fn new(phases: Vec<Phase>) -> Self {
        Self { phases }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// A roadmap milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub status: PhaseStatus,

    /// Absent in JSON means "no tasks".
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Phase {
    /// Convenience constructor for tests and embedding.
    pub fn new(title: impl Into<String>, status: impl Into<PhaseStatus>) -> Self {
        Self {
            title: title.into(),
            date: None,
            description: None,
            status: status.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_task(mut self, name: impl Into<String>, completed: bool) -> Self {
        self.tasks.push(Task::new(name, completed));
        self
    }

    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    pub fn completion(&self) -> u8 {
        completion_percent(self.completed_tasks(), self.tasks.len())
    }
}

/// Atomic unit of work inside a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub completed: bool,
}

impl Task {
    pub fn new(name: impl Into<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document_in_source_order() {
        let json = r#"
        {
          "phases": [
            {
              "title": "Setup",
              "date": "2024-01",
              "description": "Bootstrap",
              "status": "completed",
              "tasks": [
                { "name": "A", "completed": true },
                { "name": "B", "completed": false }
              ]
            },
            { "title": "Launch", "status": "todo" }
          ]
        }"#;
        let doc = RoadmapDocument::from_json(json).expect("deserialize");

        assert_eq!(doc.phases.len(), 2);
        assert_eq!(doc.phases[0].title, "Setup");
        assert_eq!(doc.phases[0].date.as_deref(), Some("2024-01"));
        assert_eq!(doc.phases[0].tasks[1].name, "B");
        assert_eq!(doc.phases[1].title, "Launch");
    }

    #[test]
    fn missing_tasks_means_zero_tasks() {
        let json = r#"{ "phases": [ { "title": "Later", "status": "todo" } ] }"#;
        let doc = RoadmapDocument::from_json(json).expect("deserialize");

        assert!(!doc.phases[0].has_tasks());
        assert_eq!(doc.phases[0].completion(), 0);
    }

    #[test]
    fn setup_phase_with_two_of_three_is_67() {
        let phase = Phase::new("Setup", "completed")
            .with_task("A", true)
            .with_task("B", true)
            .with_task("C", false);
        assert_eq!(phase.completed_tasks(), 2);
        assert_eq!(phase.completion(), 67);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(RoadmapDocument::from_json("{ phases: ").is_err());
    }
}
