use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::calendar::{grid, ViewMode};

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(inner);

        let tab = |mode: ViewMode| {
            let style = if app.view_mode == mode {
                theme.selected.add_modifier(Modifier::BOLD)
            } else {
                theme.dim
            };
            Span::styled(format!(" {} ", mode.label()), style)
        };

        let title = Line::from(vec![
            Span::styled(" Palette Calendar ", theme.accent.add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {} ", grid::month_title(app.selected_date)), theme.header),
            Span::raw("  "),
            tab(ViewMode::Week),
            tab(ViewMode::Month),
        ]);
        frame.render_widget(Paragraph::new(title), left);

        let hints = Line::from(Span::styled("t:오늘  T:테마  ?:도움말 ", theme.dim));
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), right);
    }
}
