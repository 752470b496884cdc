use chrono::{NaiveDate, NaiveTime};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::form::{self, FormState, DATE_FORMAT, TIME_FORMAT};
use crate::calendar::{CalendarEvent, EventDraft, EventId, EventKind, Project, ProjectId};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Title,
    Description,
    Personal,
    Project,
    Kind,
    Date,
    StartTime,
    EndTime,
}

impl FormField {
    /// Project and kind are hidden for personal events, so the cycle skips
    /// them.
    pub fn next(&self, personal: bool) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Personal,
            FormField::Personal if personal => FormField::Date,
            FormField::Personal => FormField::Project,
            FormField::Project => FormField::Kind,
            FormField::Kind => FormField::Date,
            FormField::Date => FormField::StartTime,
            FormField::StartTime => FormField::EndTime,
            FormField::EndTime => FormField::Title,
        }
    }

    pub fn prev(&self, personal: bool) -> Self {
        match self {
            FormField::Title => FormField::EndTime,
            FormField::Description => FormField::Title,
            FormField::Personal => FormField::Description,
            FormField::Project => FormField::Personal,
            FormField::Kind => FormField::Project,
            FormField::Date if personal => FormField::Personal,
            FormField::Date => FormField::Kind,
            FormField::StartTime => FormField::Date,
            FormField::EndTime => FormField::StartTime,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventFormState {
    pub editing: Option<EventId>,
    pub title: String,
    pub description: String,
    pub is_personal: bool,
    pub project_id: Option<ProjectId>,
    pub kind: EventKind,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub active_field: FormField,
}

impl EventFormState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            editing: None,
            title: String::new(),
            description: String::new(),
            is_personal: false,
            project_id: None,
            kind: EventKind::Event,
            date: date.format(DATE_FORMAT).to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            active_field: FormField::Title,
        }
    }

    pub fn edit(event: &CalendarEvent) -> Self {
        Self {
            editing: Some(event.id.clone()),
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            is_personal: event.is_personal,
            project_id: event.project_id.clone(),
            kind: event.kind,
            date: event.date.format(DATE_FORMAT).to_string(),
            start_time: event.start_time.format(TIME_FORMAT).to_string(),
            end_time: event.end_time.format(TIME_FORMAT).to_string(),
            active_field: FormField::Title,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    pub fn parsed_start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.start_time.trim(), TIME_FORMAT).ok()
    }

    pub fn parsed_end_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.end_time.trim(), TIME_FORMAT).ok()
    }

    /// Checking personal clears the project selection.
    pub fn toggle_personal(&mut self) {
        self.is_personal = !self.is_personal;
        if self.is_personal {
            self.project_id = None;
        }
    }

    pub fn to_draft(&self) -> Option<EventDraft> {
        if self.title.trim().is_empty() {
            return None;
        }
        let project_id = if self.is_personal {
            None
        } else {
            Some(self.project_id.clone()?)
        };
        Some(EventDraft {
            title: self.title.trim().to_string(),
            date: self.parsed_date()?,
            start_time: self.parsed_start_time()?,
            end_time: self.parsed_end_time()?,
            project_id,
            kind: self.kind,
            description: form::optional(&self.description),
            is_personal: self.is_personal,
        })
    }
}

impl FormState for EventFormState {
    fn next_field(&mut self) {
        self.active_field = self.active_field.next(self.is_personal);
    }

    fn prev_field(&mut self) {
        self.active_field = self.active_field.prev(self.is_personal);
    }

    fn input_char(&mut self, c: char) {
        match self.active_field {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            FormField::Date => self.date.push(c),
            FormField::StartTime => self.start_time.push(c),
            FormField::EndTime => self.end_time.push(c),
            FormField::Personal | FormField::Project | FormField::Kind => {}
        }
    }

    fn backspace(&mut self) {
        match self.active_field {
            FormField::Title => { self.title.pop(); }
            FormField::Description => { self.description.pop(); }
            FormField::Date => { self.date.pop(); }
            FormField::StartTime => { self.start_time.pop(); }
            FormField::EndTime => { self.end_time.pop(); }
            FormField::Personal | FormField::Project | FormField::Kind => {}
        }
    }

    fn space(&mut self, projects: &[Project]) {
        match self.active_field {
            FormField::Personal => self.toggle_personal(),
            FormField::Project => {
                self.project_id = form::next_project(self.project_id.as_ref(), projects);
            }
            FormField::Kind => self.kind = self.kind.cycle(),
            _ => self.input_char(' '),
        }
    }

    fn is_valid(&self) -> bool {
        self.to_draft().is_some()
    }
}

pub struct EventForm;

impl EventForm {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &EventFormState,
        projects: &[Project],
        theme: &Theme,
    ) {
        // Center the form popup
        let form_area = form::popup_area(area, 56, 14);

        // Clear background
        frame.render_widget(Clear, form_area);

        let title = if state.editing.is_some() { " 일정 수정 " } else { " 새 일정 추가 " };
        let block = Block::default()
            .title(title)
            .title_style(theme.accent.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(theme.accent);

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // description
            Constraint::Length(1), // personal
            Constraint::Length(1), // project
            Constraint::Length(1), // kind
            Constraint::Length(1), // date
            Constraint::Length(1), // start time
            Constraint::Length(1), // end time
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        let active = state.active_field;
        form::render_field(
            frame,
            rows[0],
            "제목 *",
            form::text_value(&state.title),
            active == FormField::Title,
            theme,
        );
        form::render_field(
            frame,
            rows[1],
            "설명",
            form::text_value(&state.description),
            active == FormField::Description,
            theme,
        );
        form::render_field(
            frame,
            rows[2],
            "",
            form::checkbox_value("개인 일정", state.is_personal),
            active == FormField::Personal,
            theme,
        );

        if state.is_personal {
            form::render_field(frame, rows[3], "프로젝트", Line::styled("--", theme.dim), false, theme);
            form::render_field(frame, rows[4], "유형", Line::styled("--", theme.dim), false, theme);
        } else {
            let project = state
                .project_id
                .as_ref()
                .and_then(|id| projects.iter().find(|p| &p.id == id));
            form::render_field(
                frame,
                rows[3],
                "프로젝트 *",
                form::project_value(project),
                active == FormField::Project,
                theme,
            );
            form::render_field(
                frame,
                rows[4],
                "유형",
                Line::styled(state.kind.label(), state.kind.color()),
                active == FormField::Kind,
                theme,
            );
        }

        form::render_field(
            frame,
            rows[5],
            "날짜",
            form::text_value(&state.date),
            active == FormField::Date,
            theme,
        );
        form::render_field(
            frame,
            rows[6],
            "시작 시간",
            form::text_value(&state.start_time),
            active == FormField::StartTime,
            theme,
        );
        form::render_field(
            frame,
            rows[7],
            "종료 시간",
            form::text_value(&state.end_time),
            active == FormField::EndTime,
            theme,
        );

        let help = form::help_line(theme, state.is_valid(), state.editing.is_some());
        frame.render_widget(Paragraph::new(help), rows[9]);
    }
}
