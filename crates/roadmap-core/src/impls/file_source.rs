//! FileSource - ローカルファイルからの読み込み

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::{LoadError, RoadmapDocument};
use crate::ports::RoadmapSource;

pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl RoadmapSource for FileSource {
    fn location(&self) -> &str {
        &self.display
    }

    async fn fetch(&self) -> Result<RoadmapDocument, LoadError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "phases": [ {{ "title": "Setup", "status": "todo" }} ] }}"#
        )
        .unwrap();

        let source = FileSource::new(file.path());
        let doc = source.fetch().await.unwrap();
        assert_eq!(doc.phases.len(), 1);
        assert_eq!(doc.phases[0].title, "Setup");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("roadmap.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[tokio::test]
    async fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = FileSource::new(file.path()).fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
