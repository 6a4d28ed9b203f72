//! StaticSource - メモリ上の JSON 文字列（テスト・埋め込み用）

use async_trait::async_trait;

use crate::domain::{LoadError, RoadmapDocument};
use crate::ports::RoadmapSource;

pub struct StaticSource {
    json: String,
}

impl StaticSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

#[async_trait]
impl RoadmapSource for StaticSource {
    fn location(&self) -> &str {
        "<inline>"
    }

    async fn fetch(&self) -> Result<RoadmapDocument, LoadError> {
        Ok(RoadmapDocument::from_json(&self.json)?)
    }
}
