//! AppBuilder - 設定からアプリケーションを組み立てる
//!
//! # Fail-fast
//! - source / container id が空なら build() で BuildError を返す
//! - source を明示しなければ設定の文字列から FileSource / HttpSource を選ぶ

use crate::config::RoadmapConfig;
use crate::domain::{LoadError, Locale};
use crate::impls::{HtmlSurface, render_page, source_for};
use crate::ports::RoadmapSource;
use crate::view::{Layout, RenderOptions};

use super::controller::RoadmapApp;

/// BuildError はアプリケーション構築時のエラー
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("roadmap source is empty")]
    EmptySource,

    #[error("container id is empty")]
    EmptyContainerId,
}

/// # 使用例
/// ```ignore
/// let mut app = AppBuilder::from_config(config)
///     .layout(Layout::Timeline)
///     .build()?;
/// app.start().await?;
/// println!("{}", app.page());
/// ```
pub struct AppBuilder {
    config: RoadmapConfig,
    source: Option<Box<dyn RoadmapSource>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::from_config(RoadmapConfig::default())
    }

    pub fn from_config(config: RoadmapConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// File path or http(s) URL.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.config.source = location.into();
        self
    }

    /// Explicit source; takes precedence over the configured location.
    pub fn source(mut self, source: Box<dyn RoadmapSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.config.container_id = id.into();
        self
    }

    pub fn build(self) -> Result<App, BuildError> {
        if self.config.container_id.trim().is_empty() {
            return Err(BuildError::EmptyContainerId);
        }
        let source = match self.source {
            Some(source) => source,
            None => {
                if self.config.source.trim().is_empty() {
                    return Err(BuildError::EmptySource);
                }
                source_for(&self.config.source)
            }
        };
        let options = RenderOptions {
            layout: self.config.layout,
            locale: self.config.locale,
        };
        let surface = HtmlSurface::new(self.config.container_id);
        Ok(App {
            controller: RoadmapApp::new(options, surface),
            source,
            title: self.config.title,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller rendering into HTML plus the source it loads from.
pub struct App {
    pub controller: RoadmapApp<HtmlSurface>,
    source: Box<dyn RoadmapSource>,
    title: String,
}

impl App {
    /// The single load of the page's lifetime.
    pub async fn start(&mut self) -> Result<(), LoadError> {
        self.controller.load(self.source.as_ref()).await
    }

    pub fn source_location(&self) -> &str {
        self.source.location()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whole HTML document for the current state.
    pub fn page(&self) -> String {
        render_page(
            &self.title,
            self.controller.filters(),
            self.controller.surface(),
            self.controller.options().locale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::StaticSource;

    #[test]
    fn test_build_defaults() {
        let app = AppBuilder::new().build().unwrap();
        assert_eq!(app.source_location(), "roadmap.json");
        assert_eq!(app.title(), "Roadmap");
        assert_eq!(app.controller.surface().container_id(), "roadmap-container");
    }

    #[test]
    fn test_build_empty_source() {
        let app = AppBuilder::new().location("  ").build();
        assert!(matches!(app, Err(BuildError::EmptySource)));
    }

    #[test]
    fn test_build_empty_container_id() {
        let app = AppBuilder::new().container_id("").build();
        assert!(matches!(app, Err(BuildError::EmptyContainerId)));
    }

    #[test]
    fn test_explicit_source_wins() {
        let app = AppBuilder::new()
            .location("")
            .source(Box::new(StaticSource::new("{}")))
            .build()
            .unwrap();
        assert_eq!(app.source_location(), "<inline>");
    }

    #[tokio::test]
    async fn test_start_and_page() {
        let mut app = AppBuilder::new()
            .locale(Locale::Fr)
            .title("Feuille de route")
            .source(Box::new(StaticSource::new(
                r#"{"phases":[{"title":"Étape 1","status":"in-progress"}]}"#,
            )))
            .build()
            .unwrap();
        app.start().await.unwrap();

        let page = app.page();
        assert!(page.contains(r#"<html lang="fr">"#));
        assert!(page.contains("<h1>Feuille de route</h1>"));
        assert!(page.contains(r#"<span class="status-badge in-progress">En cours</span>"#));
    }
}
