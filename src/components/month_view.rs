use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::item::{self, Density};
use super::week_view::{day_number_style, is_drop_target};
use crate::app::App;
use crate::calendar::filter::{bucket_days, more_label, DayItems, MONTH_CELL_CAP};
use crate::calendar::grid::{self, DAY_NAMES, MONTH_CELLS, WEEK_LEN};
use crate::calendar::{ItemRef, ViewMode};
use crate::hitmap::{HitMap, Target};

const WEEKS: usize = MONTH_CELLS / WEEK_LEN;

pub struct MonthView;

impl MonthView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
        let theme = &app.theme;
        let title = format!(" {} ", grid::month_title(app.selected_date));

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < WEEK_LEN as u16 || inner.height < 1 + WEEKS as u16 {
            return;
        }

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);
        let col_constraints = [Constraint::Ratio(1, WEEK_LEN as u32); WEEK_LEN];

        // Header row
        let header_cols = Layout::horizontal(col_constraints).split(rows[0]);
        for (i, name) in DAY_NAMES.iter().enumerate() {
            let label =
                Paragraph::new(Span::styled(*name, theme.header)).alignment(Alignment::Center);
            frame.render_widget(label, header_cols[i]);
        }

        let week_rows =
            Layout::vertical([Constraint::Ratio(1, WEEKS as u32); WEEKS]).split(rows[1]);
        let days = grid::grid_days(ViewMode::Month, app.selected_date);
        let buckets = bucket_days(app.store(), &app.filter, &days);
        for (w, week) in buckets.chunks(WEEK_LEN).enumerate() {
            let cells = Layout::horizontal(col_constraints).split(week_rows[w]);
            for (d, items) in week.iter().enumerate() {
                render_cell(frame, cells[d], app, items, hits);
            }
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, app: &App, items: &DayItems, hits: &mut HitMap) {
    let date = items.date;
    hits.push(area, Target::Day(date));

    let theme = &app.theme;
    let in_month = grid::is_same_month(date, app.selected_date);
    let border_style = if is_drop_target(app, date) { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(border_style)
        .padding(Padding::right(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let number_style = if in_month || date == app.selected_date || date == app.today {
        day_number_style(app, date)
    } else {
        theme.outside
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{:>2}", date.day()), number_style)),
        Rect { height: 1, ..inner },
    );

    let capped = items.capped(MONTH_CELL_CAP);
    let store = app.store();

    let mut lines: Vec<(Line<'static>, ItemRef)> = Vec::new();
    for (idx, event) in capped.events.iter().enumerate() {
        let selected = date == app.selected_date && idx == app.item_cursor;
        lines.push((
            item::event_line(store, event, Density::Compact, selected, theme),
            ItemRef::Event(event.id.clone()),
        ));
    }
    for (idx, todo) in capped.todos.iter().enumerate() {
        let selected = date == app.selected_date && items.events.len() + idx == app.item_cursor;
        lines.push((
            item::todo_line(store, todo, Density::Compact, selected, theme),
            ItemRef::Todo(todo.id.clone()),
        ));
    }

    // Short cells give up item rows to keep the overflow label visible.
    let available = (inner.height - 1) as usize;
    let mut hidden = capped.hidden;
    if lines.len() + usize::from(hidden > 0) > available {
        let keep = available.saturating_sub(1);
        hidden += lines.len().saturating_sub(keep);
        lines.truncate(keep);
    }

    let dim_outside = !in_month;
    let mut y = inner.y + 1;
    for (line, item) in lines {
        let line_area = Rect { y, height: 1, ..inner };
        let line = if dim_outside { line.patch_style(theme.outside) } else { line };
        frame.render_widget(Paragraph::new(line), line_area);
        hits.push(line_area, Target::Item(date, item));
        y += 1;
    }
    if hidden > 0 && y < inner.bottom() {
        frame.render_widget(
            Paragraph::new(Span::styled(more_label(hidden), theme.dim)),
            Rect { y, height: 1, ..inner },
        );
    }
}
