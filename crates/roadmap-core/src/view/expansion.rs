//! Per-item expand/collapse state of the timeline.
//!
//! ドキュメントとは別に持つ表示専用の状態。キーは現在の描画結果内の
//! item index。フィルタを含む再描画のたびに空に戻る。

use std::collections::BTreeSet;

/// Where a click on a timeline item originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Anywhere on the item body.
    Item,
    /// A task's completion checkbox; never toggles the item.
    TaskIndicator,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    expanded: BTreeSet<usize>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Flip one item; returns the new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.expanded.remove(&index) {
            false
        } else {
            self.expanded.insert(index);
            true
        }
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
