//! roadmap-core
//!
//! Roadmap (phases + tasks) の読み込みと描画。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（RoadmapDocument, Phase, Task, PhaseStatus, StatusFilter, Locale, LoadError）
//! - **ports**: 抽象化レイヤー（RoadmapSource, Surface）
//! - **impls**: 実装（FileSource, HttpSource, StaticSource, HtmlSurface）
//! - **view**: 純粋な描画（View, render, ExpansionSet, FilterBar）
//! - **app**: アプリケーション層（AppBuilder, RoadmapApp, loader, AppState）
//! - **config**: TOML 設定

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod view;
