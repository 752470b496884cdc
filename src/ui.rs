use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::{App, Modal};
use crate::calendar::ViewMode;
use crate::components::{self, DayView, Header, MonthView, Sidebar, StatusBar, WeekView};
use crate::hitmap::HitMap;

/// Below this width the sidebar is hidden.
const SIDEBAR_MIN_TOTAL: u16 = 60;
/// From this content width on, the selected day gets its own panel.
const DAY_PANEL_MIN_CONTENT: u16 = 100;
const DAY_PANEL_WIDTH: u16 = 36;

/// Draws the whole screen and records clickable regions into `hits`.
pub fn draw(frame: &mut Frame, app: &App, hits: &mut HitMap) {
    hits.clear();
    let area = frame.area();

    let [header, body, status] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    Header::render(frame, header, app);

    let content = if area.width >= SIDEBAR_MIN_TOTAL {
        let [sidebar, content] = Layout::horizontal([
            Constraint::Length(app.sidebar_width),
            Constraint::Min(20),
        ])
        .areas(body);
        Sidebar::render(frame, sidebar, app, hits);
        content
    } else {
        body
    };

    render_calendar(frame, content, app, hits);
    StatusBar::render(frame, status, app);
    render_modal(frame, area, app);
}

fn render_calendar(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let (grid_area, day_area) = if area.width >= DAY_PANEL_MIN_CONTENT {
        let [grid, day] = Layout::horizontal([
            Constraint::Min(40),
            Constraint::Length(DAY_PANEL_WIDTH),
        ])
        .areas(area);
        (grid, Some(day))
    } else {
        (area, None)
    };

    match app.view_mode {
        ViewMode::Week => WeekView::render(frame, grid_area, app, hits),
        ViewMode::Month => MonthView::render(frame, grid_area, app, hits),
    }

    if let Some(day_area) = day_area {
        DayView::render(frame, day_area, app, hits);
    }
}

fn render_modal(frame: &mut Frame, area: Rect, app: &App) {
    let Some(modal) = &app.modal else {
        return;
    };
    let store = app.store();
    let theme = &app.theme;
    match modal {
        Modal::TodoForm(state) => {
            components::TodoForm::render(frame, area, state, store.projects(), theme)
        }
        Modal::EventForm(state) => {
            components::EventForm::render(frame, area, state, store.projects(), theme)
        }
        Modal::ProjectForm(state) => components::ProjectForm::render(frame, area, state, theme),
        Modal::Detail(item) => {
            components::day_view::render_detail_popup(frame, area, store, item, theme)
        }
        Modal::ConfirmDeleteProject(id) => {
            components::confirm::render_delete_project(frame, area, store, id, theme)
        }
        Modal::Help => components::help::render(frame, area, theme),
    }
}
