use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::form::{self, FormState};
use crate::calendar::{Project, ProjectDraft, ProjectId, PROJECT_COLORS};
use crate::theme::{parse_color, Theme};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectField {
    Name,
    Description,
    Color,
}

impl ProjectField {
    pub fn next(&self) -> Self {
        match self {
            ProjectField::Name => ProjectField::Description,
            ProjectField::Description => ProjectField::Color,
            ProjectField::Color => ProjectField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ProjectField::Name => ProjectField::Color,
            ProjectField::Description => ProjectField::Name,
            ProjectField::Color => ProjectField::Description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectFormState {
    pub editing: Option<ProjectId>,
    pub name: String,
    pub description: String,
    pub color: String,
    pub active_field: ProjectField,
}

impl Default for ProjectFormState {
    fn default() -> Self {
        Self {
            editing: None,
            name: String::new(),
            description: String::new(),
            color: PROJECT_COLORS[0].to_string(),
            active_field: ProjectField::Name,
        }
    }
}

impl ProjectFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(project: &Project) -> Self {
        Self {
            editing: Some(project.id.clone()),
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            color: project.color.clone(),
            active_field: ProjectField::Name,
        }
    }

    /// Next palette color. A custom color from the seed restarts the palette.
    pub fn next_color(&mut self) {
        let next = PROJECT_COLORS
            .iter()
            .position(|c| c.eq_ignore_ascii_case(&self.color))
            .map(|i| (i + 1) % PROJECT_COLORS.len())
            .unwrap_or(0);
        self.color = PROJECT_COLORS[next].to_string();
    }

    pub fn to_draft(&self) -> Option<ProjectDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(ProjectDraft {
            name: name.to_string(),
            color: self.color.clone(),
            description: form::optional(&self.description),
        })
    }
}

impl FormState for ProjectFormState {
    fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    fn input_char(&mut self, c: char) {
        match self.active_field {
            ProjectField::Name => self.name.push(c),
            ProjectField::Description => self.description.push(c),
            ProjectField::Color => {}
        }
    }

    fn backspace(&mut self) {
        match self.active_field {
            ProjectField::Name => { self.name.pop(); }
            ProjectField::Description => { self.description.pop(); }
            ProjectField::Color => {}
        }
    }

    fn space(&mut self, _projects: &[Project]) {
        match self.active_field {
            ProjectField::Color => self.next_color(),
            _ => self.input_char(' '),
        }
    }

    fn is_valid(&self) -> bool {
        self.to_draft().is_some()
    }
}

pub struct ProjectForm;

impl ProjectForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &ProjectFormState, theme: &Theme) {
        let form_area = form::popup_area(area, 56, 9);
        frame.render_widget(Clear, form_area);

        let title = if state.editing.is_some() { " 프로젝트 수정 " } else { " 새 프로젝트 추가 " };
        let block = Block::default()
            .title(title)
            .title_style(theme.accent.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(theme.accent);

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // name
            Constraint::Length(1), // description
            Constraint::Length(1), // color
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        let active = state.active_field;
        let swatches: Vec<Span> = PROJECT_COLORS
            .iter()
            .map(|c| {
                let color = parse_color(c).unwrap_or_default();
                let marker = if c.eq_ignore_ascii_case(&state.color) { "▣" } else { "■" };
                Span::styled(marker, Style::default().fg(color))
            })
            .collect();

        form::render_field(
            frame,
            rows[0],
            "이름 *",
            form::text_value(&state.name),
            active == ProjectField::Name,
            theme,
        );
        form::render_field(
            frame,
            rows[1],
            "설명",
            form::text_value(&state.description),
            active == ProjectField::Description,
            theme,
        );
        form::render_field(
            frame,
            rows[2],
            "색상",
            Line::from(swatches),
            active == ProjectField::Color,
            theme,
        );

        let help = form::help_line(theme, state.is_valid(), state.editing.is_some());
        frame.render_widget(Paragraph::new(help), rows[4]);
    }
}
