use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::calendar::{Project, ProjectId};
use crate::theme::Theme;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Key handling shared by the todo, event and project popups.
pub trait FormState {
    fn next_field(&mut self);
    fn prev_field(&mut self);
    fn input_char(&mut self, c: char);
    fn backspace(&mut self);
    /// Space: toggles or cycles on choice fields, types a space elsewhere.
    fn space(&mut self, projects: &[Project]);
    fn is_valid(&self) -> bool;
}

/// Next project after `current`, wrapping. `None` picks the first.
pub fn next_project(current: Option<&ProjectId>, projects: &[Project]) -> Option<ProjectId> {
    if projects.is_empty() {
        return None;
    }
    let next = match current.and_then(|id| projects.iter().position(|p| &p.id == id)) {
        Some(i) => (i + 1) % projects.len(),
        None => 0,
    };
    Some(projects[next].id.clone())
}

pub fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Centered popup of at most `w`×`h`.
pub fn popup_area(area: Rect, w: u16, h: u16) -> Rect {
    let popup_w = area.width.min(w);
    let popup_h = area.height.min(h);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(x, y, popup_w, popup_h)
}

pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: Line<'_>,
    active: bool,
    theme: &Theme,
) {
    let label_w = if label.is_empty() { 0 } else { 10 };
    let mut spans = Vec::new();
    if !label.is_empty() {
        spans.push(Span::styled(
            format!("{:<width$}", label, width = label_w),
            theme.dim,
        ));
    }
    let value_style = if active { theme.accent } else { Style::default() };
    for span in value.spans {
        spans.push(Span::styled(span.content, value_style.patch(span.style)));
    }
    if active {
        spans.push(Span::styled("_", theme.accent));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn text_value(value: &str) -> Line<'_> {
    Line::from(value)
}

pub fn checkbox_value(label: &str, checked: bool) -> Line<'static> {
    Line::from(format!("[{}] {}", if checked { "x" } else { " " }, label))
}

pub fn project_value(project: Option<&Project>) -> Line<'static> {
    match project {
        Some(p) => Line::from(vec![
            Span::styled("  ", Style::default().bg(p.display_color())),
            Span::raw(format!(" {}", p.name)),
        ]),
        None => Line::from(Span::styled(
            "프로젝트 선택",
            Style::default().add_modifier(Modifier::DIM),
        )),
    }
}

pub fn help_line(theme: &Theme, valid: bool, editing: bool) -> Line<'static> {
    let save = if editing { ":수정 " } else { ":추가 " };
    let mut spans = vec![
        Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(":다음 ", theme.dim),
        Span::styled("Space", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(":선택 ", theme.dim),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(save, theme.dim),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(":취소", theme.dim),
    ];
    if !valid {
        spans.push(Span::styled("  * 필수 항목", theme.dim));
    }
    Line::from(spans)
}
