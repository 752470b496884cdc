use std::time::Duration;

use chrono::Local;
use color_eyre::Result;
use tracing::{info, warn};

use palette_calendar::app::App;
use palette_calendar::calendar::Seed;
use palette_calendar::config::Config;
use palette_calendar::event::{self, AppEvent};
use palette_calendar::hitmap::HitMap;
use palette_calendar::{input, logging, share, tui, ui};

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    let log_path = logging::init(&config.logging)?;

    let today = Local::now().date_naive();
    let seed = match &config.calendar.seed_path {
        Some(path) => Seed::load(path)?,
        None => Seed::embedded()?,
    };
    let store = seed.into_store(today)?;
    info!(
        projects = store.projects().len(),
        todos = store.todos().len(),
        events = store.events().len(),
        users = store.users().len(),
        log = ?log_path,
        "starting"
    );

    let mut app = App::new(store, &config, today);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init(config.ui.mouse_enabled)?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    info!("exiting");
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    let mut hits = HitMap::default();

    while app.running {
        terminal.draw(|frame| ui::draw(frame, app, &mut hits))?;

        if let Some(text) = app.pending_clipboard.take() {
            if let Err(e) = share::copy_to_clipboard(&text) {
                warn!(error = %e, "clipboard write failed");
                app.status_message = Some(format!("클립보드 복사 실패: {}", text));
            }
        }

        match event::next_event(Duration::from_millis(100))? {
            Some(AppEvent::Key(key)) => input::handle_key(app, key),
            Some(AppEvent::Mouse(mouse)) => input::handle_mouse(app, mouse, &hits),
            None => app.tick(),
        }
    }

    Ok(())
}
