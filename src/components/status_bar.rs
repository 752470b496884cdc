use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, DragSource, Focus};
use crate::calendar::filter::{visible_events, visible_todos};

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let w = area.width as usize;
        let style = app.theme.status;

        let store = app.store();
        let mode_str = format!(
            " [{}] {} · TODO {} · 일정 {} ",
            app.view_mode.label(),
            app.filter.label(),
            visible_todos(&app.filter, store.todos()).len(),
            visible_events(&app.filter, store.events()).len(),
        );

        let hints = if let Some(drag) = &app.drag {
            let title = store
                .todo(&drag.todo_id)
                .map(|t| t.title.clone())
                .unwrap_or_default();
            match drag.source {
                DragSource::Keyboard => format!(" 이동 중: {}  ←↑→↓:날짜 m:놓기 Esc:취소", title),
                DragSource::Mouse => format!(" 이동 중: {}", title),
            }
        } else if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else if app.focus == Focus::Sidebar {
            " ↑↓:이동  Enter:필터  e:수정  d:삭제  s:공유  Esc:달력".to_string()
        } else if w >= 90 {
            " ←↑→↓:날짜  [/]:이전/다음  Tab:항목  a:TODO  n:일정  P:프로젝트  m:이동  q:종료".to_string()
        } else if w >= 50 {
            " ←↑→↓:날짜 a:TODO n:일정 ?:도움말 q:종료".to_string()
        } else {
            " q:종료".to_string()
        };

        let used = mode_str.chars().count() + hints.chars().count();
        let padding = " ".repeat(w.saturating_sub(used));

        let line = Line::from(vec![
            Span::styled(mode_str, style),
            Span::styled(hints, style),
            Span::styled(padding, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}
