//! Surface port - 表示先の抽象化
//!
//! render は純粋関数で `View` を返すだけ。`Surface::apply` がそれを実際の
//! 表示先に反映する。反映は常に全置換（差分パッチはしない）。

use crate::view::View;

/// A display target for rendered views.
pub trait Surface {
    /// Replace everything currently displayed with `view`.
    fn apply(&mut self, view: &View);
}
