//! RoadmapApp - ロード・フィルタ・開閉をつなぐコントローラ
//!
//! # 流れ
//! 1. `load()`: 取得 → 成功なら AppState を保持して `all` で描画、失敗ならエラー表示
//! 2. `click_filter()`: ボタンを唯一の active にして、そのフィルタで再描画（全置換）
//! 3. `click_item()`: timeline の item を開閉（タスクのチェックボックス上のクリックは無視）
//!
//! 再描画のたびに開閉状態はリセットされる。

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::LoadError;
use crate::ports::{RoadmapSource, Surface};
use crate::view::{
    ClickTarget, ExpansionSet, FilterBar, Layout, RenderOptions, View, error_view, loading_view,
    render,
};

use super::loader;
use super::state::AppState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("roadmap is not loaded yet")]
    NotLoaded,

    #[error("no filter button at index {0}")]
    UnknownFilter(usize),

    #[error("no displayed item at index {0}")]
    UnknownItem(usize),
}

pub struct RoadmapApp<S: Surface> {
    options: RenderOptions,
    state: Option<AppState>,
    filters: FilterBar,
    expansion: ExpansionSet,
    view: View,
    surface: S,
}

impl<S: Surface> RoadmapApp<S> {
    /// Starts out showing the loading placeholder.
    pub fn new(options: RenderOptions, mut surface: S) -> Self {
        let view = loading_view(options.locale);
        surface.apply(&view);
        Self {
            options,
            state: None,
            filters: FilterBar::standard(options.locale),
            expansion: ExpansionSet::new(),
            view,
            surface,
        }
    }

    /// Load once from `source`. On failure the error view replaces everything.
    pub async fn load(&mut self, source: &dyn RoadmapSource) -> Result<(), LoadError> {
        match loader::load(source).await {
            Ok(state) => {
                self.state = Some(state);
                self.filters.activate(0);
                self.rerender();
                Ok(())
            }
            Err(e) => {
                self.show(error_view(&e, self.options.locale));
                Err(e)
            }
        }
    }

    /// Use an already loaded state (no fetch).
    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = Some(state);
        self.rerender();
        self
    }

    /// Filter-button click.
    pub fn click_filter(&mut self, index: usize) -> Result<(), ControllerError> {
        if self.state.is_none() {
            warn!(index, "filter clicked before the roadmap was loaded");
            return Err(ControllerError::NotLoaded);
        }
        if self.filters.activate(index).is_none() {
            return Err(ControllerError::UnknownFilter(index));
        }
        self.rerender();
        Ok(())
    }

    /// Click the button for `status`, adding one if the bar has none.
    pub fn select_status(&mut self, status: &str) -> Result<(), ControllerError> {
        if self.state.is_none() {
            warn!(status, "filter selected before the roadmap was loaded");
            return Err(ControllerError::NotLoaded);
        }
        let index = self.filters.ensure(status);
        self.click_filter(index)
    }

    /// Timeline item click. Returns whether the item is expanded afterwards.
    ///
    /// The list layout has no per-item handler, so clicks there change nothing.
    pub fn click_item(
        &mut self,
        index: usize,
        target: ClickTarget,
    ) -> Result<bool, ControllerError> {
        if self.state.is_none() {
            warn!(index, "item clicked before the roadmap was loaded");
            return Err(ControllerError::NotLoaded);
        }
        if index >= self.view.blocks().len() {
            return Err(ControllerError::UnknownItem(index));
        }
        if self.options.layout != Layout::Timeline || target == ClickTarget::TaskIndicator {
            return Ok(self.expansion.is_expanded(index));
        }
        let expanded = self.expansion.toggle(index);
        self.refresh();
        Ok(expanded)
    }

    pub fn state(&self) -> Option<&AppState> {
        self.state.as_ref()
    }

    pub fn filters(&self) -> &FilterBar {
        &self.filters
    }

    pub fn expansion(&self) -> &ExpansionSet {
        &self.expansion
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// The view currently on the surface.
    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Full re-render with the active filter; collapses every item.
    fn rerender(&mut self) {
        self.expansion.clear();
        debug!(
            filter = %self.filters.active_filter(),
            layout = self.options.layout.as_str(),
            "render"
        );
        self.refresh();
    }

    /// Rebuild from state with the active filter and the current expansion.
    fn refresh(&mut self) {
        let Some(state) = &self.state else {
            return;
        };
        let view = render(
            state.phases(),
            self.filters.active_filter(),
            &self.expansion,
            self.options,
        );
        debug!(visible = view.blocks().len(), "view built");
        self.show(view);
    }

    fn show(&mut self, view: View) {
        self.surface.apply(&view);
        self.view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Locale, Phase, RoadmapDocument};
    use crate::impls::{HtmlSurface, StaticSource};

    fn state() -> AppState {
        AppState::new(RoadmapDocument::new(vec![
            Phase::new("Plan", "todo"),
            Phase::new("Setup", "completed").with_task("A", true),
            Phase::new("Build", "in-progress").with_task("core", false),
        ]))
    }

    fn timeline() -> RenderOptions {
        RenderOptions {
            layout: Layout::Timeline,
            locale: Locale::En,
        }
    }

    fn titles<S: Surface>(app: &RoadmapApp<S>) -> Vec<String> {
        app.view().blocks().iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn starts_with_loading_view() {
        let app = RoadmapApp::new(RenderOptions::default(), HtmlSurface::default());
        assert!(matches!(app.view(), View::Loading { .. }));
        assert!(app.surface().content().contains("Loading"));
    }

    #[tokio::test]
    async fn load_renders_everything_with_all_active() {
        let mut app = RoadmapApp::new(RenderOptions::default(), HtmlSurface::default());
        let source = StaticSource::new(
            r#"{"phases":[{"title":"A","status":"todo"},{"title":"B","status":"completed"}]}"#,
        );
        app.load(&source).await.unwrap();

        assert_eq!(titles(&app), vec!["A", "B"]);
        assert_eq!(app.filters().active_index(), 0);
    }

    #[tokio::test]
    async fn load_failure_shows_only_error() {
        let mut app = RoadmapApp::new(RenderOptions::default(), HtmlSurface::default());
        let err = app.load(&StaticSource::new("nope")).await.unwrap_err();

        assert!(matches!(err, LoadError::Parse(_)));
        assert!(app.view().is_error());
        assert!(app.state().is_none());
        assert!(app.surface().content().starts_with(r#"<div class="error">Error: "#));
    }

    #[test]
    fn filter_click_before_load_is_rejected() {
        let mut app = RoadmapApp::new(RenderOptions::default(), HtmlSurface::default());
        assert_eq!(app.click_filter(1), Err(ControllerError::NotLoaded));
        assert_eq!(app.filters().active_index(), 0);
    }

    #[test]
    fn select_and_item_click_before_load_are_rejected() {
        let mut app = RoadmapApp::new(timeline(), HtmlSurface::default());
        assert_eq!(app.select_status("todo"), Err(ControllerError::NotLoaded));
        assert_eq!(
            app.click_item(0, ClickTarget::Item),
            Err(ControllerError::NotLoaded)
        );
        assert_eq!(app.filters().buttons().len(), 4);
        assert!(matches!(app.view(), View::Loading { .. }));
    }

    #[test]
    fn filter_click_replaces_output() {
        let mut app =
            RoadmapApp::new(RenderOptions::default(), HtmlSurface::default()).with_state(state());

        app.click_filter(3).unwrap(); // completed
        assert_eq!(titles(&app), vec!["Setup"]);
        assert!(!app.surface().content().contains("Plan"));
        assert_eq!(app.filters().active_index(), 3);

        app.click_filter(0).unwrap();
        assert_eq!(titles(&app), vec!["Plan", "Setup", "Build"]);
    }

    #[test]
    fn unknown_filter_index_is_an_error() {
        let mut app =
            RoadmapApp::new(RenderOptions::default(), HtmlSurface::default()).with_state(state());
        assert_eq!(app.click_filter(7), Err(ControllerError::UnknownFilter(7)));
    }

    #[test]
    fn select_status_without_match_shows_placeholder() {
        let mut app =
            RoadmapApp::new(RenderOptions::default(), HtmlSurface::default()).with_state(state());
        app.select_status("archived").unwrap();
        assert!(app.view().is_empty_result());
        assert_eq!(app.filters().buttons().len(), 5);
    }

    #[test]
    fn item_click_toggles_independently() {
        let mut app = RoadmapApp::new(timeline(), HtmlSurface::default()).with_state(state());

        assert!(app.click_item(0, ClickTarget::Item).unwrap());
        assert!(app.click_item(2, ClickTarget::Item).unwrap());
        assert!(!app.click_item(0, ClickTarget::Item).unwrap());

        let flags: Vec<_> = app.view().blocks().iter().map(|b| b.expanded).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn task_indicator_click_does_not_toggle() {
        let mut app = RoadmapApp::new(timeline(), HtmlSurface::default()).with_state(state());
        assert!(!app.click_item(1, ClickTarget::TaskIndicator).unwrap());
        assert!(app.expansion().is_empty());
    }

    #[test]
    fn refilter_collapses_all_items() {
        let mut app = RoadmapApp::new(timeline(), HtmlSurface::default()).with_state(state());
        app.click_item(1, ClickTarget::Item).unwrap();
        assert!(app.surface().content().contains("timeline-item expanded"));

        app.click_filter(0).unwrap();
        assert!(app.expansion().is_empty());
        assert!(!app.surface().content().contains("timeline-item expanded"));
    }

    #[test]
    fn item_click_out_of_range() {
        let mut app = RoadmapApp::new(timeline(), HtmlSurface::default()).with_state(state());
        app.click_filter(1).unwrap(); // only "Plan"
        assert_eq!(
            app.click_item(1, ClickTarget::Item),
            Err(ControllerError::UnknownItem(1))
        );
    }

    #[test]
    fn list_layout_ignores_item_clicks() {
        let mut app =
            RoadmapApp::new(RenderOptions::default(), HtmlSurface::default()).with_state(state());
        assert!(!app.click_item(0, ClickTarget::Item).unwrap());
        assert!(app.expansion().is_empty());
    }
}
