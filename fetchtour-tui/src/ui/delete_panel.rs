use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::Panel;
use crate::ui::layout::Layout;
use crate::ui::{alert_line, loading_line, panel_block};

/// Render the DELETE panel: posts with a delete action, plus the last result
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let label = if app.delete.is_deleting() {
        " DELETE /posts/{id} [sending...] "
    } else {
        " DELETE /posts/{id} "
    };
    let block = panel_block(app, Panel::Delete, label.to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (list_area, alert_area) = Layout::with_alert(inner);

    if app.delete.is_loading() {
        f.render_widget(Paragraph::new(loading_line()), list_area);
    } else {
        let focused = app.focused == Panel::Delete;
        let items: Vec<ListItem> = app
            .delete
            .posts()
            .iter()
            .enumerate()
            .map(|(idx, post)| {
                let style = if focused && idx == app.delete_cursor {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<60}", post.title), style),
                    Span::styled(" [d] delete", Style::default().fg(Color::Red)),
                ]))
            })
            .collect();

        f.render_widget(List::new(items), list_area);
    }

    f.render_widget(Paragraph::new(alert_line(app.delete.message())), alert_area);
}
