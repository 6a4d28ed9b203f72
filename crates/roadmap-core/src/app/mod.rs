//! App - アプリケーション層
//!
//! - **AppBuilder**: 設定からの構築とワイヤリング
//! - **RoadmapApp**: ロード・フィルタ・開閉のコントローラ
//! - **loader**: 1 回だけのロード
//! - **AppState**: ロード済みドキュメント

pub mod builder;
pub mod controller;
pub mod loader;
pub mod state;

pub use self::builder::{App, AppBuilder, BuildError};
pub use self::controller::{ControllerError, RoadmapApp};
pub use self::loader::load;
pub use self::state::AppState;
