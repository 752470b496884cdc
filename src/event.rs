use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Terminal input the app reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

pub fn poll_event(timeout: Duration) -> color_eyre::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Next key press or mouse event. Key releases, focus changes and pastes are
/// skipped; a resize returns `None` so the caller redraws.
pub fn next_event(timeout: Duration) -> color_eyre::Result<Option<AppEvent>> {
    loop {
        match poll_event(timeout)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                return Ok(Some(AppEvent::Key(key)));
            }
            Some(Event::Mouse(mouse)) => return Ok(Some(AppEvent::Mouse(mouse))),
            Some(Event::Resize(..)) => return Ok(None),
            Some(_) => continue,
            None => return Ok(None),
        }
    }
}
