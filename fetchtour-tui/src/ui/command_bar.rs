use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::{AppMode, Panel};

/// Render the command bar (bottom bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let content = if let Some(ref msg) = app.status_message {
        Line::from(msg.as_str())
    } else {
        Line::from(Span::styled(hints(app), Style::default().fg(Color::DarkGray)))
    };

    f.render_widget(Paragraph::new(content), area);
}

/// Keybind hints based on mode and focused panel
fn hints(app: &App) -> &'static str {
    match (app.mode, app.focused) {
        (AppMode::Confirm, _) => "y: delete | n/Esc: cancel",
        (AppMode::Insert, _) => "Esc: normal | Tab/Enter: next field | Ctrl-s: submit",
        (AppMode::Normal, Panel::Fetch) => "Tab: next panel | q: quit",
        (AppMode::Normal, Panel::Create) => "i: edit fields | Ctrl-s: submit | Tab: next panel | q: quit",
        (AppMode::Normal, Panel::Edit) => {
            "j/k: move | Enter: select | i: edit | Ctrl-s: submit | Tab: next panel | q: quit"
        }
        (AppMode::Normal, Panel::Delete) => "j/k: move | d: delete | Tab: next panel | q: quit",
    }
}
