use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::item::{self, Density};
use crate::app::App;
use crate::calendar::filter::{bucket_days, more_label, DayItems};
use crate::calendar::grid::{self, DAY_NAMES, WEEK_LEN};
use crate::calendar::{ItemRef, ViewMode};
use crate::hitmap::{HitMap, Target};

pub struct WeekView;

impl WeekView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
        let days = grid::grid_days(ViewMode::Week, app.selected_date);
        let title = format!(
            " {} - {} ",
            days[0].format("%Y.%m.%d"),
            days[WEEK_LEN - 1].format("%m.%d")
        );

        let block = Block::default()
            .title(title)
            .title_style(app.theme.header)
            .borders(Borders::ALL)
            .border_style(app.theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < WEEK_LEN as u16 || inner.height < 2 {
            return;
        }

        let cols =
            Layout::horizontal([Constraint::Ratio(1, WEEK_LEN as u32); WEEK_LEN]).split(inner);
        let buckets = bucket_days(app.store(), &app.filter, &days);
        for (i, items) in buckets.iter().enumerate() {
            render_column(frame, cols[i], app, items, i + 1 < WEEK_LEN, hits);
        }
    }
}

/// Header style for a day: today and selection win over the plain header.
pub fn day_number_style(app: &App, date: NaiveDate) -> Style {
    let theme = &app.theme;
    if date == app.selected_date && date == app.today {
        theme.today.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else if date == app.selected_date {
        theme.selected
    } else if date == app.today {
        theme.today
    } else {
        theme.header
    }
}

/// True when a carried todo would land on `date`.
pub fn is_drop_target(app: &App, date: NaiveDate) -> bool {
    app.drag.as_ref().is_some_and(|drag| match drag.hover {
        Some(hover) => hover == date,
        None => app.selected_date == date,
    })
}

fn render_column(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    items: &DayItems,
    divider: bool,
    hits: &mut HitMap,
) {
    let date = items.date;
    hits.push(area, Target::Day(date));

    let theme = &app.theme;
    let border_style = if is_drop_target(app, date) { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(if divider { Borders::RIGHT } else { Borders::NONE })
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let weekday = date.weekday().num_days_from_sunday() as usize;
    let label = format!("{} {}", DAY_NAMES[weekday], date.day());
    let header = Paragraph::new(Line::from(Span::styled(label, day_number_style(app, date))))
        .alignment(Alignment::Center);
    frame.render_widget(header, Rect { height: 1, ..inner });

    let body = Rect {
        y: inner.y + 1,
        height: inner.height - 1,
        ..inner
    };
    if body.height == 0 {
        return;
    }

    if items.is_empty() {
        frame.render_widget(Paragraph::new(Span::styled("일정 없음", theme.dim)), body);
        return;
    }

    let rows = body.height as usize;
    let total = items.len();
    // Keep the last row for the overflow label when the column is too short.
    let shown = if total > rows { rows.saturating_sub(1) } else { total };
    let store = app.store();

    for idx in 0..shown {
        let selected = date == app.selected_date && idx == app.item_cursor;
        let (line, item) = match items.events.get(idx) {
            Some(event) => (
                item::event_line(store, event, Density::Compact, selected, theme),
                ItemRef::Event(event.id.clone()),
            ),
            None => {
                let todo = items.todos[idx - items.events.len()];
                (
                    item::todo_line(store, todo, Density::Compact, selected, theme),
                    ItemRef::Todo(todo.id.clone()),
                )
            }
        };
        let line_area = Rect {
            y: body.y + idx as u16,
            height: 1,
            ..body
        };
        frame.render_widget(Paragraph::new(line), line_area);
        hits.push(line_area, Target::Item(date, item));
    }

    if shown < total {
        let more = Rect {
            y: body.y + shown as u16,
            height: 1,
            ..body
        };
        let label = Span::styled(more_label(total - shown), theme.dim);
        frame.render_widget(Paragraph::new(label), more);
    }
}
