use fetchtour_core::FetchListView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::mode::Panel;
use crate::ui::{loading_line, panel_block};

/// Render the GET panel: loading, error, or the first few posts
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = panel_block(app, Panel::Fetch, " GET /posts ".to_string());

    match app.fetch.view() {
        FetchListView::Loading => {
            f.render_widget(Paragraph::new(loading_line()).block(block), area);
        }

        FetchListView::Failed(message) => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )))
            .block(block)
            .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }

        FetchListView::Loaded(posts) if posts.is_empty() => {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No posts",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            f.render_widget(empty, area);
        }

        FetchListView::Loaded(posts) => {
            let items: Vec<ListItem> = posts
                .iter()
                .map(|post| {
                    ListItem::new(vec![
                        Line::from(Span::styled(
                            post.title.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(
                            first_line(&post.body).to_string(),
                            Style::default().fg(Color::Gray),
                        )),
                    ])
                })
                .collect();

            f.render_widget(List::new(items).block(block), area);
        }
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
