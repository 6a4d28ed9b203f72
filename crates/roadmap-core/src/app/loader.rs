//! Loader - 1 回だけの非同期ロード
//!
//! retry・timeout・cancel なし。失敗はそのまま呼び出し側へ返す。

use tracing::{info, warn};

use crate::domain::LoadError;
use crate::ports::RoadmapSource;

use super::state::AppState;

pub async fn load(source: &dyn RoadmapSource) -> Result<AppState, LoadError> {
    match source.fetch().await {
        Ok(document) => {
            info!(
                location = %source.location(),
                phases = document.phases.len(),
                "roadmap loaded"
            );
            Ok(AppState::new(document))
        }
        Err(e) => {
            warn!(
                location = %source.location(),
                kind = e.kind(),
                error = %e,
                "roadmap load failed"
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::StaticSource;

    #[tokio::test]
    async fn load_success_builds_state() {
        let source = StaticSource::new(r#"{"phases":[{"title":"A","status":"todo"}]}"#);
        let state = load(&source).await.unwrap();
        assert_eq!(state.phases().len(), 1);
    }

    #[tokio::test]
    async fn load_failure_is_returned() {
        let source = StaticSource::new("{");
        assert!(matches!(load(&source).await, Err(LoadError::Parse(_))));
    }
}
