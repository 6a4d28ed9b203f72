//! View - 描画ロジック
//!
//! - **model**: View / PhaseBlock（表示内容の記述）
//! - **render**: 純粋な描画関数
//! - **expansion**: timeline の開閉状態
//! - **filter_bar**: フィルタボタン群

pub mod expansion;
pub mod filter_bar;
pub mod model;
pub mod render;

pub use self::expansion::{ClickTarget, ExpansionSet};
pub use self::filter_bar::{FilterBar, FilterButton};
pub use self::model::{Layout, PhaseBlock, TaskLine, View};
pub use self::render::{RenderOptions, error_view, loading_view, render};
