use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::form::{self, FormState, DATE_FORMAT};
use crate::calendar::{Priority, Project, ProjectId, Todo, TodoDraft, TodoId};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TodoField {
    Title,
    Description,
    Project,
    Priority,
    Date,
}

impl TodoField {
    pub fn next(&self) -> Self {
        match self {
            TodoField::Title => TodoField::Description,
            TodoField::Description => TodoField::Project,
            TodoField::Project => TodoField::Priority,
            TodoField::Priority => TodoField::Date,
            TodoField::Date => TodoField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            TodoField::Title => TodoField::Date,
            TodoField::Description => TodoField::Title,
            TodoField::Project => TodoField::Description,
            TodoField::Priority => TodoField::Project,
            TodoField::Date => TodoField::Priority,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TodoFormState {
    /// `Some` when editing an existing todo.
    pub editing: Option<TodoId>,
    pub title: String,
    pub description: String,
    pub project_id: Option<ProjectId>,
    pub priority: Priority,
    pub date: String,
    pub active_field: TodoField,
}

impl TodoFormState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            editing: None,
            title: String::new(),
            description: String::new(),
            project_id: None,
            priority: Priority::Medium,
            date: date.format(DATE_FORMAT).to_string(),
            active_field: TodoField::Title,
        }
    }

    pub fn edit(todo: &Todo) -> Self {
        Self {
            editing: Some(todo.id.clone()),
            title: todo.title.clone(),
            description: todo.description.clone().unwrap_or_default(),
            project_id: Some(todo.project_id.clone()),
            priority: todo.priority,
            date: todo.date.format(DATE_FORMAT).to_string(),
            active_field: TodoField::Title,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// The draft to save, or `None` while required fields are missing.
    pub fn to_draft(&self) -> Option<TodoDraft> {
        if self.title.trim().is_empty() {
            return None;
        }
        Some(TodoDraft {
            title: self.title.trim().to_string(),
            project_id: self.project_id.clone()?,
            date: self.parsed_date()?,
            priority: self.priority,
            description: form::optional(&self.description),
        })
    }
}

impl FormState for TodoFormState {
    fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    fn input_char(&mut self, c: char) {
        match self.active_field {
            TodoField::Title => self.title.push(c),
            TodoField::Description => self.description.push(c),
            TodoField::Date => self.date.push(c),
            TodoField::Project | TodoField::Priority => {}
        }
    }

    fn backspace(&mut self) {
        match self.active_field {
            TodoField::Title => { self.title.pop(); }
            TodoField::Description => { self.description.pop(); }
            TodoField::Date => { self.date.pop(); }
            TodoField::Project | TodoField::Priority => {}
        }
    }

    fn space(&mut self, projects: &[Project]) {
        match self.active_field {
            TodoField::Project => {
                self.project_id = form::next_project(self.project_id.as_ref(), projects);
            }
            TodoField::Priority => self.priority = self.priority.cycle(),
            _ => self.input_char(' '),
        }
    }

    fn is_valid(&self) -> bool {
        self.to_draft().is_some()
    }
}

pub struct TodoForm;

impl TodoForm {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &TodoFormState,
        projects: &[Project],
        theme: &Theme,
    ) {
        let form_area = form::popup_area(area, 56, 11);
        frame.render_widget(Clear, form_area);

        let title = if state.editing.is_some() { " TODO 수정 " } else { " 새 TODO 추가 " };
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
            Constraint::Length(1), // project
            Constraint::Length(1), // priority
            Constraint::Length(1), // date
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        let active = state.active_field;
        let project = state
            .project_id
            .as_ref()
            .and_then(|id| projects.iter().find(|p| &p.id == id));
        let priority = Line::styled(state.priority.label(), state.priority.color());

        form::render_field(
            frame,
            rows[0],
            "제목 *",
            form::text_value(&state.title),
            active == TodoField::Title,
            theme,
        );
        form::render_field(
            frame,
            rows[1],
            "설명",
            form::text_value(&state.description),
            active == TodoField::Description,
            theme,
        );
        form::render_field(
            frame,
            rows[2],
            "프로젝트 *",
            form::project_value(project),
            active == TodoField::Project,
            theme,
        );
        form::render_field(frame, rows[3], "우선순위", priority, active == TodoField::Priority, theme);
        form::render_field(
            frame,
            rows[4],
            "날짜",
            form::text_value(&state.date),
            active == TodoField::Date,
            theme,
        );

        let help = form::help_line(theme, state.is_valid(), state.editing.is_some());
        frame.render_widget(Paragraph::new(help), rows[6]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn projects() -> Vec<Project> {
        vec![Project {
            id: ProjectId::from("p1"),
            name: "Work".to_string(),
            color: "#10B981".to_string(),
            description: None,
            created_at: Local::now(),
            members: Vec::new(),
            is_shared: false,
        }]
    }

    #[test]
    fn requires_title_and_project() {
        let mut form = TodoFormState::new(date());
        assert!(!form.is_valid());

        for c in "Ship it".chars() {
            form.input_char(c);
        }
        assert!(!form.is_valid());

        form.active_field = TodoField::Project;
        form.space(&projects());
        assert!(form.is_valid());

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.title, "Ship it");
        assert_eq!(draft.project_id, ProjectId::from("p1"));
        assert_eq!(draft.date, date());
        assert_eq!(draft.priority, Priority::Medium);
    }

    #[test]
    fn whitespace_title_does_not_count() {
        let mut form = TodoFormState::new(date());
        form.title = "   ".to_string();
        form.project_id = Some(ProjectId::from("p1"));
        assert!(form.to_draft().is_none());
    }

    #[test]
    fn unparseable_date_blocks_save() {
        let mut form = TodoFormState::new(date());
        form.title = "x".to_string();
        form.project_id = Some(ProjectId::from("p1"));
        form.active_field = TodoField::Date;
        form.backspace();
        assert!(!form.is_valid());
    }

    #[test]
    fn space_cycles_priority_and_types_in_text_fields() {
        let mut form = TodoFormState::new(date());
        form.active_field = TodoField::Priority;
        form.space(&[]);
        assert_eq!(form.priority, Priority::Low);

        form.active_field = TodoField::Title;
        form.input_char('a');
        form.space(&[]);
        form.input_char('b');
        assert_eq!(form.title, "a b");
    }

    #[test]
    fn field_order_wraps() {
        let mut field = TodoField::Title;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, TodoField::Title);
        assert_eq!(TodoField::Title.prev(), TodoField::Date);
    }
}
