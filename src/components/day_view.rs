use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::form;
use super::item::{self, Density};
use crate::app::App;
use crate::calendar::grid::DAY_NAMES;
use crate::calendar::{CalendarEvent, ItemRef, Project, Store, Todo};
use crate::hitmap::{HitMap, Target};
use crate::theme::Theme;

pub fn day_title(date: NaiveDate) -> String {
    let weekday = DAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    format!("{}월 {}일 ({})", date.month(), date.day(), weekday)
}

/// Every visible item of the selected day, uncapped.
pub struct DayView;

impl DayView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
        let theme = &app.theme;
        let date = app.selected_date;
        let items = app.day_items(date);

        let mut counts = Vec::new();
        if !items.events.is_empty() {
            counts.push(format!("일정 {}", items.events.len()));
        }
        if !items.todos.is_empty() {
            counts.push(format!("TODO {}", items.todos.len()));
        }
        let count_str = if counts.is_empty() {
            String::new()
        } else {
            format!(" {} ", counts.join(" · "))
        };

        let block = Block::default()
            .title(format!(" {} ", day_title(date)))
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(count_str, theme.dim)))
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        hits.push(area, Target::Day(date));

        if items.is_empty() {
            frame.render_widget(block, area);
            let msg = Paragraph::new("일정 없음").style(theme.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let store = app.store();
        let refs = items.refs();
        let list: Vec<ListItem> = refs
            .iter()
            .enumerate()
            .map(|(idx, item_ref)| {
                let selected = idx == app.item_cursor;
                let line = match item_ref {
                    ItemRef::Event(_) => {
                        let event = items.events[idx];
                        item::event_line(store, event, Density::Full, selected, theme)
                    }
                    ItemRef::Todo(_) => {
                        let todo = items.todos[idx - items.events.len()];
                        item::todo_line(store, todo, Density::Full, selected, theme)
                    }
                };
                ListItem::new(line)
            })
            .collect();

        // The list scrolls so the cursor row stays on screen.
        let mut state = ListState::default().with_selected(Some(app.item_cursor));
        frame.render_stateful_widget(List::new(list).block(block), area, &mut state);

        let offset = state.offset();
        let rows = inner.height as usize;
        for (row, item_ref) in refs.into_iter().skip(offset).take(rows).enumerate() {
            let line_area = Rect {
                y: inner.y + row as u16,
                height: 1,
                ..inner
            };
            hits.push(line_area, Target::Item(date, item_ref));
        }
    }
}

/// Detail popup for one todo or event.
pub fn render_detail_popup(
    frame: &mut Frame,
    area: Rect,
    store: &Store,
    item: &ItemRef,
    theme: &Theme,
) {
    let popup_w = area.width.min(60).max(30);
    let popup_h = area.height.min(18).max(8);
    let popup_area = form::popup_area(area, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    match item {
        ItemRef::Event(id) => {
            if let Some(event) = store.event(id) {
                render_event_detail(frame, popup_area, store, event, theme);
            }
        }
        ItemRef::Todo(id) => {
            if let Some(todo) = store.todo(id) {
                render_todo_detail(frame, popup_area, store, todo, theme);
            }
        }
    }
}

fn detail_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.accent.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(theme.accent)
}

fn field(label: &str, value: impl Into<String>, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), theme.dim),
        Span::raw(value.into()),
    ])
}

fn project_lines(store: &Store, project: &Project, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    let mut spans = vec![
        Span::styled("  ", Style::default().bg(project.display_color())),
        Span::raw(format!(" {}", project.name)),
    ];
    if project.is_shared {
        spans.push(Span::styled(" 공유됨", theme.accent));
    }
    lines.push(Line::from(spans));

    let members = store.members_of(project);
    if !members.is_empty() {
        let names: Vec<&str> = members.iter().map(|u| u.name.as_str()).collect();
        lines.push(field("멤버", names.join(", "), theme));
    }
}

fn description_lines(description: Option<&str>, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    if let Some(text) = description.filter(|d| !d.is_empty()) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("설명:", theme.dim)));
        for line in text.lines() {
            lines.push(Line::from(line.to_string()));
        }
    }
}

fn render_event_detail(
    frame: &mut Frame,
    area: Rect,
    store: &Store,
    event: &CalendarEvent,
    theme: &Theme,
) {
    let block = detail_block(&event.title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    match event.project_id.as_ref().and_then(|id| store.project(id)) {
        Some(project) => project_lines(store, project, theme, &mut lines),
        None => lines.push(Line::styled("개인 일정", Style::default().fg(event.kind.color()))),
    }

    lines.push(Line::from(""));
    if !event.is_personal {
        lines.push(field("유형", event.kind.label(), theme));
    }
    lines.push(field("날짜", day_title(event.date), theme));
    lines.push(field("시간", event.duration_display(), theme));
    description_lines(event.description.as_deref(), theme, &mut lines);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("e:수정  Esc:닫기", theme.dim)));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_todo_detail(frame: &mut Frame, area: Rect, store: &Store, todo: &Todo, theme: &Theme) {
    let block = detail_block(&todo.title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(project) = store.project(&todo.project_id) {
        project_lines(store, project, theme, &mut lines);
    }

    lines.push(Line::from(""));
    lines.push(field("상태", if todo.completed { "완료" } else { "미완료" }, theme));
    lines.push(Line::from(vec![
        Span::styled("우선순위: ", theme.dim),
        Span::styled(todo.priority.label(), Style::default().fg(todo.priority.color())),
    ]));
    lines.push(field("날짜", day_title(todo.date), theme));
    description_lines(todo.description.as_deref(), theme, &mut lines);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("e:수정  Esc:닫기", theme.dim)));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
