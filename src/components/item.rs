use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::calendar::{CalendarEvent, Store, Todo};
use crate::theme::Theme;

/// How much of an item fits on one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Density {
    /// Month cells: marker and title only.
    Compact,
    /// Week columns and the day panel.
    Full,
}

fn project_color(store: &Store, todo: &Todo) -> Color {
    store
        .project(&todo.project_id)
        .map(|p| p.display_color())
        .unwrap_or(Color::Gray)
}

pub fn event_color(store: &Store, event: &CalendarEvent) -> Color {
    if event.is_personal {
        return event.kind.color();
    }
    event
        .project_id
        .as_ref()
        .and_then(|id| store.project(id))
        .map(|p| p.display_color())
        .unwrap_or_else(|| event.kind.color())
}

pub fn todo_line(
    store: &Store,
    todo: &Todo,
    density: Density,
    selected: bool,
    theme: &Theme,
) -> Line<'static> {
    let checkbox = if todo.completed { "☑ " } else { "☐ " };
    let mut title_style = if todo.completed {
        theme.dim.add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    if selected {
        title_style = title_style.patch(theme.highlight);
    }

    let mut spans = vec![
        Span::styled("▌", Style::default().fg(project_color(store, todo))),
        Span::styled(checkbox, title_style),
        Span::styled(todo.title.clone(), title_style),
    ];
    if density == Density::Full {
        spans.push(Span::styled(
            format!(" {}", todo.priority.label()),
            Style::default().fg(todo.priority.color()),
        ));
    }
    Line::from(spans)
}

pub fn event_line(
    store: &Store,
    event: &CalendarEvent,
    density: Density,
    selected: bool,
    theme: &Theme,
) -> Line<'static> {
    let color = event_color(store, event);
    let mut title_style = Style::default().fg(color);
    if selected {
        title_style = title_style.patch(theme.highlight);
    }

    let mut spans = vec![Span::styled("●", Style::default().fg(color))];
    match density {
        Density::Compact => {
            spans.push(Span::styled(
                format!("{} ", event.start_time.format("%H:%M")),
                theme.dim,
            ));
        }
        Density::Full => {
            spans.push(Span::styled(format!(" {} ", event.duration_display()), theme.dim));
        }
    }
    spans.push(Span::styled(event.title.clone(), title_style));
    if density == Density::Full {
        let tag = if event.is_personal { "개인" } else { event.kind.label() };
        spans.push(Span::styled(format!(" [{}]", tag), theme.dim));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventKind, ProjectDraft, TodoDraft, Priority, EventDraft};
    use chrono::{NaiveDate, NaiveTime};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn completed_todo_is_checked_and_struck_through() {
        let mut store = Store::new();
        let project = store.create_project(ProjectDraft {
            name: "p".to_string(),
            color: "#EF4444".to_string(),
            description: None,
        });
        let id = store
            .create_todo(TodoDraft {
                title: "Write docs".to_string(),
                project_id: project,
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                priority: Priority::High,
                description: None,
            })
            .unwrap();
        store.toggle_todo(&id).unwrap();
        let todo = store.todo(&id).unwrap();

        let line = todo_line(&store, todo, Density::Full, false, &Theme::default());
        assert_eq!(text(&line), "▌☑ Write docs 높음");
        assert!(line.spans[2].style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(0xEF, 0x44, 0x44)));
    }

    #[test]
    fn personal_event_uses_kind_color_and_tag() {
        let mut store = Store::new();
        let id = store
            .create_event(EventDraft {
                title: "Gym".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
                project_id: None,
                kind: EventKind::Personal,
                description: None,
                is_personal: true,
            })
            .unwrap();
        let event = store.event(&id).unwrap();

        let full = event_line(&store, event, Density::Full, false, &Theme::default());
        assert_eq!(text(&full), "● 18:00 - 19:30 Gym [개인]");
        let compact = event_line(&store, event, Density::Compact, false, &Theme::default());
        assert_eq!(text(&compact), "●18:00 Gym");
        assert_eq!(event_color(&store, event), EventKind::Personal.color());
    }
}
