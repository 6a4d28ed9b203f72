//! Display labels.
//!
//! 2 種類のラベルセット（英語・フランス語）のみ。未知の status は原文をそのまま表示する。

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::status::PhaseStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Label for a status; unknown statuses fall back to the raw string.
    pub fn status_label<'a>(&self, status: &'a PhaseStatus) -> &'a str {
        match (self, status) {
            (Locale::En, PhaseStatus::Todo) => "To do",
            (Locale::En, PhaseStatus::InProgress) => "In progress",
            (Locale::En, PhaseStatus::Completed) => "Completed",
            (Locale::Fr, PhaseStatus::Todo) => "À faire",
            (Locale::Fr, PhaseStatus::InProgress) => "En cours",
            (Locale::Fr, PhaseStatus::Completed) => "Terminé",
            (_, PhaseStatus::Other(raw)) => raw.as_str(),
        }
    }

    pub fn all_label(&self) -> &'static str {
        match self {
            Locale::En => "All",
            Locale::Fr => "Toutes",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Locale::En => "No phases found for this filter.",
            Locale::Fr => "Aucune phase trouvée pour ce filtre.",
        }
    }

    pub fn error_prefix(&self) -> &'static str {
        match self {
            Locale::En => "Error",
            Locale::Fr => "Erreur",
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            Locale::En => "Loading roadmap...",
            Locale::Fr => "Chargement de la roadmap...",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(format!("unsupported locale '{other}' (expected en or fr)")),
        }
    }
}
