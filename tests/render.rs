use chrono::{Duration, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use palette_calendar::app::App;
use palette_calendar::calendar::{FilterMode, ItemRef, ProjectId, Seed, TodoId, ViewMode};
use palette_calendar::config::Config;
use palette_calendar::hitmap::{HitMap, Target};
use palette_calendar::input::{handle_key, handle_mouse};
use palette_calendar::ui;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Terminal;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
}

fn seeded_app() -> App {
    let store = Seed::embedded().unwrap().into_store(today()).unwrap();
    App::new(store, &Config::default(), today())
}

/// Draws one frame and returns the screen text plus the recorded regions.
fn render(app: &App, width: u16, height: u16) -> (String, HitMap) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut hits = HitMap::default();
    terminal.draw(|frame| ui::draw(frame, app, &mut hits)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        let mut x = 0;
        while x < buffer.area.width {
            let symbol = buffer[(x, y)].symbol();
            text.push_str(symbol);
            // Hangul takes two cells; the second one is padding.
            x += if symbol.chars().any(|c| ('\u{AC00}'..='\u{D7A3}').contains(&c)) { 2 } else { 1 };
        }
        text.push('\n');
    }
    (text, hits)
}

fn mouse(kind: MouseEventKind, area: Rect) -> MouseEvent {
    MouseEvent {
        kind,
        column: area.x,
        row: area.y,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_week_view_shows_items_and_empty_days() {
    let app = seeded_app();
    let (text, hits) = render(&app, 140, 40);

    assert!(text.contains("Palette Calendar"));
    assert!(text.contains("2024년 3월"));
    assert!(text.contains("주간 회의"));
    assert!(text.contains("일정 없음"));
    assert!(text.contains("웹사이트 리뉴얼"));
    assert!(text.contains("공유됨"));

    // Every day of the week is clickable
    for offset in -3..=3 {
        let date = today() + Duration::days(offset);
        assert!(hits.area_of(&Target::Day(date)).is_some(), "{}", date);
    }
}

#[test]
fn test_month_cell_caps_items_with_overflow_label() {
    let mut app = seeded_app();
    app.set_view(ViewMode::Month);
    // Narrow enough that the day panel is hidden
    let (text, hits) = render(&app, 120, 50);

    assert!(text.contains("+1개 더"));

    // Two events, then one todo; the second todo is behind the label
    let refs = app.day_items(today()).refs();
    let drawn: Vec<bool> = refs
        .iter()
        .map(|item| hits.area_of(&Target::Item(today(), item.clone())).is_some())
        .collect();
    assert_eq!(drawn, vec![true, true, true, false]);
}

#[test]
fn test_sidebar_empty_state_after_deleting_every_project() {
    let mut app = seeded_app();
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
    handle_key(&mut app, key(KeyCode::Char('p')));
    for _ in 0..3 {
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('d')));
        handle_key(&mut app, key(KeyCode::Char('y')));
        handle_key(&mut app, key(KeyCode::Char('k')));
    }
    assert!(app.store().projects().is_empty());

    let (text, _) = render(&app, 140, 40);
    assert!(text.contains("등록된 프로젝트가 없습니다."));
    assert!(text.contains("개인 일정"));
}

#[test]
fn test_mouse_drag_moves_todo_to_another_day() {
    let mut app = seeded_app();
    let (_, hits) = render(&app, 140, 40);

    let t1 = ItemRef::Todo(TodoId::from("t1"));
    let source = hits.area_of(&Target::Item(today(), t1.clone())).unwrap();
    let target_day = today() + Duration::days(2);
    let target = hits.area_of(&Target::Day(target_day)).unwrap();

    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), source), &hits);
    assert!(app.drag.is_some());
    handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), target), &hits);
    assert_eq!(app.drag.as_ref().and_then(|d| d.hover), Some(target_day));
    handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), target), &hits);

    assert!(app.drag.is_none());
    assert_eq!(app.store().todo(&TodoId::from("t1")).unwrap().date, target_day);
    assert_eq!(app.selected_date, target_day);
    assert_eq!(app.selected_item(), Some(t1));
}

#[test]
fn test_click_without_moving_only_selects() {
    let mut app = seeded_app();
    let (_, hits) = render(&app, 140, 40);

    let t2 = ItemRef::Todo(TodoId::from("t2"));
    let source = hits.area_of(&Target::Item(today(), t2.clone())).unwrap();
    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), source), &hits);
    handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), source), &hits);

    assert!(app.drag.is_none());
    assert_eq!(app.store().todo(&TodoId::from("t2")).unwrap().date, today());
    assert_eq!(app.selected_item(), Some(t2));
}

#[test]
fn test_sidebar_clicks_toggle_filters() {
    let mut app = seeded_app();
    let (_, hits) = render(&app, 140, 40);

    let project = hits.area_of(&Target::Project(ProjectId::from("2"))).unwrap();
    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), project), &hits);
    assert!(app.filter.is_project_selected(&ProjectId::from("2")));
    assert_eq!(app.sidebar_cursor, 2);

    let personal = hits.area_of(&Target::PersonalFilter).unwrap();
    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), personal), &hits);
    assert!(app.filter.is_personal_only());

    let all = hits.area_of(&Target::AllProjects).unwrap();
    handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), all), &hits);
    assert_eq!(app.filter, FilterMode::All);
}

#[test]
fn test_scroll_changes_period() {
    let mut app = seeded_app();
    let (_, hits) = render(&app, 140, 40);
    let area = Rect::new(0, 0, 1, 1);
    handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, area), &hits);
    assert_eq!(app.selected_date, today() + Duration::days(7));
    handle_mouse(&mut app, mouse(MouseEventKind::ScrollUp, area), &hits);
    assert_eq!(app.selected_date, today());
}

#[test]
fn test_narrow_terminal_still_renders() {
    let app = seeded_app();
    let (text, _) = render(&app, 40, 12);
    assert!(text.contains("Palette"));
}

#[test]
fn test_today_keeps_highlight_in_adjacent_month_days() {
    // April 2nd shows up in the trailing row of the March grid
    let today = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
    let store = Seed::embedded().unwrap().into_store(today).unwrap();
    let mut app = App::new(store, &Config::default(), today);
    app.set_view(ViewMode::Month);
    app.select_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

    let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
    let mut hits = HitMap::default();
    terminal.draw(|frame| ui::draw(frame, &app, &mut hits)).unwrap();

    let cell = hits.area_of(&Target::Day(today)).unwrap();
    // Below the top border, right-aligned in two columns
    let number = &terminal.backend().buffer()[(cell.x + 1, cell.y + 1)];
    assert_eq!(number.symbol(), "2");
    assert_eq!(number.bg, Color::Yellow);

    // Other out-of-month days stay dim
    let other = hits
        .area_of(&Target::Day(NaiveDate::from_ymd_opt(2024, 4, 3).unwrap()))
        .unwrap();
    let number = &terminal.backend().buffer()[(other.x + 1, other.y + 1)];
    assert_eq!(number.symbol(), "3");
    assert_eq!(number.fg, Color::DarkGray);
}

#[test]
fn test_day_panel_scrolls_to_the_cursor() {
    let mut seed = String::from("[[projects]]\nid = \"p\"\nname = \"일\"\ncolor = \"#3B82F6\"\n");
    for n in 1..=25 {
        seed.push_str(&format!(
            "[[todos]]\nid = \"t{n}\"\ntitle = \"항목{n}\"\nproject = \"p\"\noffset = 0\n"
        ));
    }
    let store = Seed::parse(&seed).unwrap().into_store(today()).unwrap();
    let mut app = App::new(store, &Config::default(), today());
    // Wraps to the last item of the day
    handle_key(&mut app, KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE));
    let last = ItemRef::Todo(TodoId::from("t25"));
    assert_eq!(app.selected_item(), Some(last.clone()));

    let (text, hits) = render(&app, 140, 20);
    assert!(text.contains("항목25"));
    // The week column is too short for it, so the hit is in the day panel
    let area = hits.area_of(&Target::Item(today(), last)).unwrap();
    assert!(area.x >= 140 - 36);
    assert!(area.y < 19);
}
