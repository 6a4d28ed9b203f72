//! HtmlSurface - View を HTML 文字列に反映する Surface
//!
//! コンテナの中身を丸ごと置き換える。class 名は元のページのものをそのまま使う。

use std::fmt::Write;

use crate::domain::Locale;
use crate::ports::Surface;
use crate::view::{FilterBar, Layout, PhaseBlock, View};

pub const DEFAULT_CONTAINER_ID: &str = "roadmap-container";

/// Container element holding the rendered roadmap as markup.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    container_id: String,
    inner: String,
}

impl HtmlSurface {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            inner: String::new(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Current inner markup of the container.
    pub fn content(&self) -> &str {
        &self.inner
    }

    /// The container element with its content.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div id="{}">{}</div>"#,
            escape_html(&self.container_id),
            self.inner
        )
    }
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID)
    }
}

impl Surface for HtmlSurface {
    fn apply(&mut self, view: &View) {
        self.inner = view_markup(view);
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn view_markup(view: &View) -> String {
    match view {
        View::Loading { message } | View::Empty { message } => {
            format!(r#"<div class="loading">{}</div>"#, escape_html(message))
        }
        View::Error { message } => {
            format!(r#"<div class="error">{}</div>"#, escape_html(message))
        }
        View::Phases {
            layout: Layout::List,
            blocks,
        } => blocks.iter().map(phase_markup).collect(),
        View::Phases {
            layout: Layout::Timeline,
            blocks,
        } => {
            let mut out = String::from(r#"<ol class="timeline">"#);
            for (index, block) in blocks.iter().enumerate() {
                let class = if block.expanded {
                    "timeline-item expanded"
                } else {
                    "timeline-item"
                };
                let _ = write!(
                    out,
                    r#"<li class="{class}" data-index="{index}">{}</li>"#,
                    phase_markup(block)
                );
            }
            out.push_str("</ol>");
            out
        }
    }
}

fn phase_markup(block: &PhaseBlock) -> String {
    let status = escape_html(&block.status);
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<div class="phase" data-status="{status}"><div class="phase-header"><div><h2 class="phase-title">{}</h2>"#,
        escape_html(&block.title)
    );
    if let Some(date) = &block.date {
        let _ = write!(out, r#"<span class="phase-date">{}</span>"#, escape_html(date));
    }
    let _ = write!(
        out,
        r#"</div><span class="status-badge {status}">{}</span></div>"#,
        escape_html(&block.status_label)
    );
    if let Some(description) = &block.description {
        let _ = write!(
            out,
            r#"<p class="phase-description">{}</p>"#,
            escape_html(description)
        );
    }
    if let Some(progress) = block.progress {
        out.push_str(r#"<ul class="tasks">"#);
        for task in &block.tasks {
            let (checkbox, text) = if task.completed {
                ("task-checkbox checked", "task-text completed")
            } else {
                ("task-checkbox", "task-text")
            };
            let _ = write!(
                out,
                r#"<li class="task-item"><div class="{checkbox}"></div><span class="{text}">{}</span></li>"#,
                escape_html(&task.name)
            );
        }
        let _ = write!(
            out,
            r#"</ul><div class="progress-bar"><div class="progress-fill" style="width: {progress}%"></div></div>"#
        );
    }
    out.push_str("</div>");
    out
}

/// Full standalone page: title, filter buttons and the container.
///
/// Static markup only: no script is attached, so in a browser the
/// `filter-btn` buttons and `timeline-item`s do nothing. Each page is one
/// snapshot of the controller (active filter, expanded items).
pub fn render_page(title: &str, bar: &FilterBar, surface: &HtmlSurface, locale: Locale) -> String {
    let lang = match locale {
        Locale::En => "en",
        Locale::Fr => "fr",
    };
    let mut buttons = String::new();
    for (index, button) in bar.buttons().iter().enumerate() {
        let class = if bar.is_active(index) {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        let _ = write!(
            buttons,
            r#"<button class="{class}" data-status="{}">{}</button>"#,
            escape_html(button.filter.as_str()),
            escape_html(&button.label)
        );
    }
    let title = escape_html(title);
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<div class=\"filters\">{buttons}</div>\n{}\n</body>\n</html>\n",
        surface.to_html()
    )
}
