//! RoadmapSource port - ドキュメントの取得元の抽象化
//!
//! ファイル / HTTP / メモリ上の文字列を同じ形で扱う。
//! 1 回のロードにつき 1 回だけ呼ばれる（retry・timeout・cancel はしない）。

use async_trait::async_trait;

use crate::domain::{LoadError, RoadmapDocument};

/// Where the roadmap document comes from.
#[async_trait]
pub trait RoadmapSource: Send + Sync {
    /// Human-readable location, for logs.
    fn location(&self) -> &str;

    /// Fetch and parse the document.
    async fn fetch(&self) -> Result<RoadmapDocument, LoadError>;
}
