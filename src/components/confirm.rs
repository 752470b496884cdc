use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::form;
use crate::calendar::{ProjectId, Store};
use crate::theme::Theme;

/// Asks before a project and everything under it is deleted.
pub fn render_delete_project(
    frame: &mut Frame,
    area: Rect,
    store: &Store,
    id: &ProjectId,
    theme: &Theme,
) {
    let Some(project) = store.project(id) else {
        return;
    };
    let todos = store.todos().iter().filter(|t| &t.project_id == id).count();
    let events = store
        .events()
        .iter()
        .filter(|e| e.project_id.as_ref() == Some(id))
        .count();

    let popup = form::popup_area(area, 50, 8);
    frame.render_widget(Clear, popup);

    let danger = Style::default().fg(Color::Red);
    let block = Block::default()
        .title(" 프로젝트 삭제 ")
        .title_style(danger.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(danger);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(format!("'{}' 프로젝트를 삭제할까요?", project.name)),
        Line::styled(
            format!("연결된 TODO {}개와 일정 {}개도 함께 삭제됩니다.", todos, events),
            theme.dim,
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":삭제  ", theme.dim),
            Span::styled("n/Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":취소", theme.dim),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
