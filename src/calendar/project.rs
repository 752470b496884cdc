use chrono::{DateTime, Local};
use ratatui::style::Color;

use super::id::{ProjectId, UserId};
use crate::theme::parse_color;

/// Colors offered by the project form, in picker order.
pub const PROJECT_COLORS: [&str; 10] = [
    "#3B82F6", "#10B981", "#EF4444", "#8B5CF6", "#F59E0B", "#06B6D4", "#84CC16", "#F97316",
    "#EC4899", "#6B7280",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Hex string, stored exactly as entered.
    pub color: String,
    pub description: Option<String>,
    pub created_at: DateTime<Local>,
    pub members: Vec<UserId>,
    pub is_shared: bool,
}

impl Project {
    /// Terminal color for the project swatch. Unparseable colors render gray.
    pub fn display_color(&self) -> Color {
        parse_color(&self.color).unwrap_or(Color::Gray)
    }
}

/// Fields a user can set on a project through the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub color: String,
    pub description: Option<String>,
}
