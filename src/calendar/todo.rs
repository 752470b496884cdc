use chrono::{DateTime, Local, NaiveDate};
use ratatui::style::Color;
use serde::Deserialize;

use super::id::{ProjectId, TodoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "높음",
            Priority::Medium => "보통",
            Priority::Low => "낮음",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Priority::High => Color::Red,
            Priority::Medium => Color::Yellow,
            Priority::Low => Color::Green,
        }
    }

    /// Order used by the form picker: high, medium, low, then around.
    pub fn cycle(&self) -> Self {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub project_id: ProjectId,
    pub date: NaiveDate,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: DateTime<Local>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub project_id: ProjectId,
    pub date: NaiveDate,
    pub priority: Priority,
    pub description: Option<String>,
}
