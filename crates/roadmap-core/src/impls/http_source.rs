//! HttpSource - HTTP GET での読み込み
//!
//! 2xx 以外はステータスエラー。本文は JSON としてパースする。

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::{LoadError, RoadmapDocument};
use crate::ports::RoadmapSource;

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl RoadmapSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<RoadmapDocument, LoadError> {
        let resp = self.client.get(&self.url).send().await?;
        if !resp.status().is_success() {
            return Err(LoadError::Status {
                code: resp.status().as_u16(),
            });
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
