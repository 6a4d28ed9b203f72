//! Filter buttons.

use crate::domain::{Locale, PhaseStatus, StatusFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub label: String,
    pub filter: StatusFilter,
}

/// Sibling group of filter buttons; exactly one is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    buttons: Vec<FilterButton>,
    active: usize,
}

impl FilterBar {
    /// `all`, `todo`, `in-progress`, `completed`, with `all` active.
    pub fn standard(locale: Locale) -> Self {
        let mut buttons = vec![FilterButton {
            label: locale.all_label().to_string(),
            filter: StatusFilter::All,
        }];
        for status in [PhaseStatus::Todo, PhaseStatus::InProgress, PhaseStatus::Completed] {
            buttons.push(FilterButton {
                label: locale.status_label(&status).to_string(),
                filter: StatusFilter::parse(status.as_str()),
            });
        }
        Self { buttons, active: 0 }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_filter(&self) -> &StatusFilter {
        &self.buttons[self.active].filter
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Make `index` the sole active button and return its filter.
    pub fn activate(&mut self, index: usize) -> Option<&StatusFilter> {
        if index >= self.buttons.len() {
            return None;
        }
        self.active = index;
        Some(&self.buttons[index].filter)
    }

    pub fn position(&self, status: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.filter.as_str() == status)
    }

    /// Index of the button for `status`, appending one labelled with the raw
    /// status when none exists yet.
    pub fn ensure(&mut self, status: &str) -> usize {
        if let Some(i) = self.position(status) {
            return i;
        }
        self.buttons.push(FilterButton {
            label: status.to_string(),
            filter: StatusFilter::parse(status),
        });
        self.buttons.len() - 1
    }
}
