//! Application state: the loaded document.
//!
//! ロード成功時に一度だけ作られ、以後は読み取り専用。

use crate::domain::{Phase, RoadmapDocument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    document: RoadmapDocument,
}

impl AppState {
    pub fn new(document: RoadmapDocument) -> Self {
        Self { document }
    }

    pub fn phases(&self) -> &[Phase] {
        &self.document.phases
    }
}
