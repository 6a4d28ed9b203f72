//! render - (phases, filter, expansion) から View への純粋な写像
//!
//! # 手順
//! 1. フィルタ（`all` はそのまま、それ以外は status の完全一致）
//! 2. 0 件なら placeholder
//! 3. phase ごとに進捗率とラベルを計算して PhaseBlock を作る

use crate::domain::{LoadError, Locale, Phase, StatusFilter};

use super::expansion::ExpansionSet;
use super::model::{Layout, PhaseBlock, TaskLine, View};

/// Display settings that do not change between renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub layout: Layout,
    pub locale: Locale,
}

/// Build the view for `phases` under `filter`.
///
/// `expanded` is only consulted for the timeline layout.
pub fn render(
    phases: &[Phase],
    filter: &StatusFilter,
    expanded: &ExpansionSet,
    options: RenderOptions,
) -> View {
    let visible = filter.apply(phases);
    if visible.is_empty() {
        return View::Empty {
            message: options.locale.empty_message().to_string(),
        };
    }

    let blocks = visible
        .into_iter()
        .enumerate()
        .map(|(index, phase)| {
            let expanded = options.layout == Layout::Timeline && expanded.is_expanded(index);
            phase_block(phase, options.locale, expanded)
        })
        .collect();

    View::Phases {
        layout: options.layout,
        blocks,
    }
}

/// The single error element shown when loading failed.
pub fn error_view(err: &LoadError, locale: Locale) -> View {
    View::Error {
        message: format!("{}: {}", locale.error_prefix(), err),
    }
}

pub fn loading_view(locale: Locale) -> View {
    View::Loading {
        message: locale.loading_message().to_string(),
    }
}

fn phase_block(phase: &Phase, locale: Locale, expanded: bool) -> PhaseBlock {
    let progress = phase.has_tasks().then(|| phase.completion());
    PhaseBlock {
        status: phase.status.as_str().to_string(),
        status_label: locale.status_label(&phase.status).to_string(),
        title: phase.title.clone(),
        date: phase.date.clone(),
        description: phase.description.clone(),
        tasks: phase
            .tasks
            .iter()
            .map(|t| TaskLine {
                name: t.name.clone(),
                completed: t.completed,
            })
            .collect(),
        progress,
        expanded,
    }
}
