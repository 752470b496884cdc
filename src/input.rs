//! Key and mouse dispatch. Everything here only calls `App` methods, so the
//! whole input surface can be driven from tests without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, DragSource, Focus, Modal, SidebarEntry};
use crate::calendar::{ItemRef, ViewMode};
use crate::hitmap::{HitMap, Target};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Clear status message on any key
    app.status_message = None;

    match &app.modal {
        Some(Modal::Help) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.close_modal();
            }
        }
        Some(Modal::Detail(_)) => match key.code {
            KeyCode::Esc | KeyCode::Enter => app.close_modal(),
            KeyCode::Char('e') => app.edit_selected_item(),
            _ => {}
        },
        Some(Modal::ConfirmDeleteProject(_)) => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete_project(),
            KeyCode::Char('n') | KeyCode::Esc => app.close_modal(),
            _ => {}
        },
        Some(_) => handle_form_input(app, key.code),
        None if app.drag.is_some() => handle_drag_input(app, key.code),
        None => match app.focus {
            Focus::Calendar => handle_calendar_input(app, key.code),
            Focus::Sidebar => handle_sidebar_input(app, key.code),
        },
    }
}

/// Keys shared by the calendar and the sidebar.
fn handle_global(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.show_help(),
        KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('P') => app.open_project_form(),
        KeyCode::Char('1') => app.set_view(ViewMode::Week),
        KeyCode::Char('2') => app.set_view(ViewMode::Month),
        KeyCode::Char('v') => app.toggle_view(),
        _ => return false,
    }
    true
}

fn handle_navigation(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.prev_day(),
        KeyCode::Right | KeyCode::Char('l') => app.next_day(),
        KeyCode::Up | KeyCode::Char('k') => app.prev_week(),
        KeyCode::Down | KeyCode::Char('j') => app.next_week(),
        KeyCode::Char('[') => app.prev_period(),
        KeyCode::Char(']') => app.next_period(),
        KeyCode::Char('t') => app.go_to_today(),
        _ => return false,
    }
    true
}

fn handle_calendar_input(app: &mut App, code: KeyCode) {
    if handle_global(app, code) || handle_navigation(app, code) {
        return;
    }
    match code {
        KeyCode::Tab => app.next_item(),
        KeyCode::BackTab => app.prev_item(),
        KeyCode::Enter => app.show_detail(),
        KeyCode::Char(' ') => app.toggle_selected_todo(),
        KeyCode::Char('e') => app.edit_selected_item(),
        KeyCode::Char('d') => app.delete_selected_item(),
        KeyCode::Char('m') => app.begin_keyboard_drag(),
        KeyCode::Char('a') => app.open_todo_form(),
        KeyCode::Char('n') => app.open_event_form(),
        KeyCode::Char('p') => app.focus_sidebar(),
        _ => {}
    }
}

fn handle_sidebar_input(app: &mut App, code: KeyCode) {
    if handle_global(app, code) {
        return;
    }
    match code {
        KeyCode::Down | KeyCode::Char('j') => app.sidebar_down(),
        KeyCode::Up | KeyCode::Char('k') => app.sidebar_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.sidebar_activate(),
        KeyCode::Char('e') => app.edit_sidebar_project(),
        KeyCode::Char('d') => app.request_delete_project(),
        KeyCode::Char('s') => app.share_sidebar_project(),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Char('p') => app.focus_calendar(),
        _ => {}
    }
}

fn handle_drag_input(app: &mut App, code: KeyCode) {
    if handle_navigation(app, code) {
        return;
    }
    match code {
        KeyCode::Char('m') | KeyCode::Enter => {
            let target = app.selected_date;
            app.drop_drag(target);
        }
        KeyCode::Esc => {
            app.cancel_drag();
            app.status_message = Some("이동을 취소했습니다".to_string());
        }
        _ => {}
    }
}

fn handle_form_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.close_modal(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_prev_field(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(' ') => app.form_space(),
        KeyCode::Char(c) => app.form_input_char(c),
        _ => {}
    }
}

fn select_sidebar_entry(app: &mut App, entry: &SidebarEntry) {
    if let Some(idx) = app.sidebar_entries().iter().position(|e| e == entry) {
        app.sidebar_cursor = idx;
    }
}

/// Mouse input against the regions recorded by the last draw.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, hits: &HitMap) {
    if app.modal.is_some() {
        return;
    }
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hits.hit(column, row).cloned() {
            Some(Target::Item(date, item)) => {
                app.focus_calendar();
                app.select_item(date, &item);
                if let ItemRef::Todo(id) = item {
                    app.begin_mouse_drag(id, date);
                }
            }
            Some(Target::Day(date)) => {
                app.focus_calendar();
                app.select_date(date);
            }
            Some(Target::Project(id)) => {
                select_sidebar_entry(app, &SidebarEntry::Project(id.clone()));
                app.toggle_project_filter(&id);
            }
            Some(Target::AllProjects) => {
                select_sidebar_entry(app, &SidebarEntry::All);
                app.clear_filter();
            }
            Some(Target::PersonalFilter) => {
                select_sidebar_entry(app, &SidebarEntry::Personal);
                app.toggle_personal_filter();
            }
            None => {}
        },
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.drag.as_ref().is_some_and(|d| d.source == DragSource::Mouse) {
                app.drag_hover(hits.day_at(column, row));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(origin) = app
                .drag
                .as_ref()
                .filter(|d| d.source == DragSource::Mouse)
                .map(|d| d.origin)
            else {
                return;
            };
            match hits.day_at(column, row) {
                Some(date) if date != origin => app.drop_drag(date),
                // Released on its own day or outside the grid
                _ => app.cancel_drag(),
            }
        }
        MouseEventKind::ScrollDown => app.next_period(),
        MouseEventKind::ScrollUp => app.prev_period(),
        _ => {}
    }
}
