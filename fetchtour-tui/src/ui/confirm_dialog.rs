use fetchtour_core::widgets::delete_list::DELETE_PROMPT;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::layout::Layout;

/// Modal yes/no prompt shown before a delete
pub fn render(f: &mut Frame, app: &App) {
    let Some(id) = app.delete.pending() else {
        return;
    };

    let popup_area = Layout::centered(f.area(), 60, 6);

    // Clear the area
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" Delete post {} ", id))
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(vec![
        Line::from(DELETE_PROMPT),
        Line::from(""),
        Line::from(Span::styled(
            "(y)es / (n)o",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(paragraph, popup_area);
}
