use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::{AppMode, Field, Panel};
use crate::ui::layout::Layout;
use crate::ui::{alert_line, loading_line, panel_block, FieldInput};

/// Render the PUT panel: pick list on the left, edit form on the right
pub fn render(
    f: &mut Frame,
    area: Rect,
    app: &App,
    title: &mut FieldInput<'_>,
    body: &mut FieldInput<'_>,
) {
    let label = match (app.edit.selected_id(), app.edit.is_submitting()) {
        (Some(id), true) => format!(" PUT /posts/{} [sending...] ", id),
        (Some(id), false) => format!(" PUT /posts/{} ", id),
        (None, _) => " PUT /posts/{id} ".to_string(),
    };
    let block = panel_block(app, Panel::Edit, label);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (content_area, alert_area) = Layout::with_alert(inner);
    let (list_area, form_area) = Layout::list_and_form(content_area);

    if app.edit.is_loading() {
        f.render_widget(Paragraph::new(loading_line()), list_area);
    } else {
        let selected_id = app.edit.selected_id();
        let focused = app.focused == Panel::Edit;
        let items: Vec<ListItem> = app
            .edit
            .posts()
            .iter()
            .enumerate()
            .map(|(idx, post)| {
                let is_selected = selected_id == Some(post.id);
                let is_cursor = focused && idx == app.edit_cursor;

                let marker = if is_selected { "▶ " } else { "  " };
                let mut style = Style::default();
                if is_selected {
                    style = style.fg(Color::Black).bg(Color::Cyan);
                } else if is_cursor {
                    style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                }

                ListItem::new(Line::from(Span::styled(format!("{}{}", marker, post.title), style)))
            })
            .collect();

        f.render_widget(List::new(items), list_area);
    }

    // The form only exists while a post is selected
    if app.edit.selected().is_some() {
        let (title_area, body_area) = Layout::fields(form_area);
        let editing = app.mode == AppMode::Insert && app.focused == Panel::Edit;
        title.render(f, title_area, editing && app.field == Field::Title);
        body.render(f, body_area, editing && app.field == Field::Body);
    } else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Select a post to edit it",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        f.render_widget(hint, form_area);
    }

    f.render_widget(Paragraph::new(alert_line(app.edit.message())), alert_area);
}
