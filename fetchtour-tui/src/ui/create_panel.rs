use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::app::App;
use crate::mode::{AppMode, Field, Panel};
use crate::ui::layout::Layout;
use crate::ui::{alert_line, panel_block, FieldInput};

/// Render the POST panel: title and body fields plus the last result
pub fn render(
    f: &mut Frame,
    area: Rect,
    app: &App,
    title: &mut FieldInput<'_>,
    body: &mut FieldInput<'_>,
) {
    let label = if app.create.is_submitting() {
        " POST /posts [sending...] "
    } else {
        " POST /posts "
    };
    let block = panel_block(app, Panel::Create, label.to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (form_area, alert_area) = Layout::with_alert(inner);
    let (title_area, body_area) = Layout::fields(form_area);

    let editing = app.mode == AppMode::Insert && app.focused == Panel::Create;
    title.render(f, title_area, editing && app.field == Field::Title);
    body.render(f, body_area, editing && app.field == Field::Body);

    f.render_widget(Paragraph::new(alert_line(app.create.message())), alert_area);
}
