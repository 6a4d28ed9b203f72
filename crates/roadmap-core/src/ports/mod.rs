//! Ports - 抽象化レイヤー
//!
//! 外部とのつなぎ目は 2 つだけ:
//! - 入力: ロードマップ JSON の取得元（RoadmapSource）
//! - 出力: 描画結果の表示先（Surface）

pub mod roadmap_source;
pub mod surface;

pub use self::roadmap_source::RoadmapSource;
pub use self::surface::Surface;
