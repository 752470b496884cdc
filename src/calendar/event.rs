use chrono::{NaiveDate, NaiveTime};
use ratatui::style::Color;
use serde::Deserialize;

use super::id::{EventId, ProjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Meeting,
    Deadline,
    #[default]
    Event,
    Personal,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Meeting => "미팅",
            EventKind::Deadline => "마감",
            EventKind::Event => "이벤트",
            EventKind::Personal => "개인",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            EventKind::Meeting => Color::Blue,
            EventKind::Deadline => Color::Red,
            EventKind::Event => Color::Green,
            EventKind::Personal => Color::Magenta,
        }
    }

    /// Kinds offered by the event form. `Personal` is expressed by the
    /// personal flag instead.
    pub fn cycle(&self) -> Self {
        match self {
            EventKind::Meeting => EventKind::Deadline,
            EventKind::Deadline => EventKind::Event,
            EventKind::Event | EventKind::Personal => EventKind::Meeting,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Always `None` for personal events.
    pub project_id: Option<ProjectId>,
    pub kind: EventKind,
    pub description: Option<String>,
    pub is_personal: bool,
}

impl CalendarEvent {
    pub fn duration_display(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub project_id: Option<ProjectId>,
    pub kind: EventKind,
    pub description: Option<String>,
    pub is_personal: bool,
}
