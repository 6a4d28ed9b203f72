//! View description: what should be on screen, independent of any display.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Flat list or timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    List,
    Timeline,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::List => "list",
            Layout::Timeline => "timeline",
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Layout::List),
            "timeline" => Ok(Layout::Timeline),
            other => Err(format!("unknown layout '{other}' (expected list or timeline)")),
        }
    }
}

/// Everything the container shows at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Before the load finished.
    Loading { message: String },

    /// Load failed. Nothing else is shown.
    Error { message: String },

    /// Filter matched no phase.
    Empty { message: String },

    Phases {
        layout: Layout,
        blocks: Vec<PhaseBlock>,
    },
}

impl View {
    pub fn blocks(&self) -> &[PhaseBlock] {
        match self {
            View::Phases { blocks, .. } => blocks,
            _ => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, View::Error { .. })
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, View::Empty { .. })
    }
}

/// One phase as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseBlock {
    /// Raw status string; also the badge's style class.
    pub status: String,
    pub status_label: String,
    pub title: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub tasks: Vec<TaskLine>,
    /// `None` when the phase has no tasks.
    pub progress: Option<u8>,
    /// Timeline only; always false in the list layout.
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine {
    pub name: String,
    pub completed: bool,
}
