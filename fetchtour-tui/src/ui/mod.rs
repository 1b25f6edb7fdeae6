pub mod command_bar;
pub mod confirm_dialog;
pub mod create_panel;
pub mod delete_panel;
pub mod edit_panel;
pub mod fetch_panel;
pub mod field_input;
pub mod layout;
pub mod status_bar;

use fetchtour_core::{Alert, AlertKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::mode::{AppMode, Field, Panel};

pub use field_input::FieldInput;

/// Main UI renderer; owns the text fields of the two forms
pub struct UI<'a> {
    pub create_title: FieldInput<'a>,
    pub create_body: FieldInput<'a>,
    pub edit_title: FieldInput<'a>,
    pub edit_body: FieldInput<'a>,
}

impl<'a> UI<'a> {
    pub fn new() -> Self {
        Self {
            create_title: FieldInput::new("Title", "Write a title"),
            create_body: FieldInput::new("Body", "Write the content"),
            edit_title: FieldInput::new("Title", ""),
            edit_body: FieldInput::new("Body", ""),
        }
    }

    /// Render the whole page
    pub fn render(&mut self, f: &mut Frame, app: &App) {
        let (status_area, content_area, command_area) = layout::Layout::main(f.area());

        status_bar::render(f, status_area, app);
        command_bar::render(f, command_area, app);

        let [get_area, post_area, put_area, delete_area] = layout::Layout::panels(content_area);

        fetch_panel::render(f, get_area, app);
        create_panel::render(f, post_area, app, &mut self.create_title, &mut self.create_body);
        edit_panel::render(f, put_area, app, &mut self.edit_title, &mut self.edit_body);
        delete_panel::render(f, delete_area, app);

        if app.mode == AppMode::Confirm {
            confirm_dialog::render(f, app);
        }
    }

    /// Type into the focused field and mirror the text into the widget
    pub fn handle_input(&mut self, key: crossterm::event::KeyEvent, app: &mut App) {
        if let Some(input) = self.focused_input(app) {
            input.handle_input(key);
            let text = input.content();
            app.set_field_text(text);
        }
    }

    /// Pull widget state into the text fields (resets, new selections)
    pub fn sync_from(&mut self, app: &App) {
        self.create_title.sync(app.create.title());
        self.create_body.sync(app.create.body());
        self.edit_title.sync(app.edit.title());
        self.edit_body.sync(app.edit.body());
    }

    fn focused_input(&mut self, app: &App) -> Option<&mut FieldInput<'a>> {
        match (app.focused, app.field) {
            (Panel::Create, Field::Title) => Some(&mut self.create_title),
            (Panel::Create, Field::Body) => Some(&mut self.create_body),
            (Panel::Edit, Field::Title) => Some(&mut self.edit_title),
            (Panel::Edit, Field::Body) => Some(&mut self.edit_body),
            _ => None,
        }
    }
}

impl<'a> Default for UI<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bordered panel block; the focused panel takes the mode colour
pub(crate) fn panel_block(app: &App, panel: Panel, title: String) -> Block<'static> {
    let border_color = if app.focused == panel {
        app.mode.color()
    } else {
        Color::DarkGray
    };

    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color))
}

/// One-line alert: green for success, red for errors
pub(crate) fn alert_line(alert: Option<&Alert>) -> Line<'static> {
    match alert {
        Some(alert) => {
            let color = match alert.kind {
                AlertKind::Success => Color::Green,
                AlertKind::Danger => Color::Red,
            };
            Line::from(Span::styled(
                alert.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(""),
    }
}

/// Dim placeholder shown while a list is loading
pub(crate) fn loading_line() -> Line<'static> {
    Line::from(Span::styled("Loading...", Style::default().fg(Color::DarkGray)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Completion;
    use fetchtour_core::error::ApiError;
    use fetchtour_core::{Post, TourConfig};
    use ratatui::{backend::TestBackend, Terminal};

    fn posts(n: u64) -> Vec<Post> {
        (1..=n)
            .map(|id| Post {
                id,
                title: format!("post number {}", id),
                body: format!("body {}", id),
                user_id: 1,
            })
            .collect()
    }

    fn draw(app: &App, ui: &mut UI<'_>) -> String {
        let backend = TestBackend::new(120, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        ui.sync_from(app);
        terminal.draw(|f| ui.render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_page_shows_loading_before_mount_settles() {
        let mut app = App::new(&TourConfig::default());
        app.mount_requests();
        let screen = draw(&app, &mut UI::new());

        assert!(screen.contains("GET /posts"));
        assert!(screen.contains("POST /posts"));
        assert!(screen.contains("PUT /posts"));
        assert!(screen.contains("DELETE /posts"));
        assert!(screen.contains("Loading..."));
    }

    #[test]
    fn test_page_renders_loaded_lists() {
        let mut app = App::new(&TourConfig::default());
        app.mount_requests();
        app.apply(Completion::FetchListLoaded(Ok(posts(10))));
        app.apply(Completion::EditListLoaded(Ok(posts(10))));
        app.apply(Completion::DeleteListLoaded(Ok(posts(10))));

        let screen = draw(&app, &mut UI::new());
        assert!(screen.contains("post number 5"));
        assert!(!screen.contains("post number 6"));
        assert!(!screen.contains("Loading..."));
    }

    #[test]
    fn test_fetch_error_replaces_list() {
        let mut app = App::new(&TourConfig::default());
        app.mount_requests();
        app.apply(Completion::FetchListLoaded(Err(ApiError::status("GET", "x", 500))));

        let screen = draw(&app, &mut UI::new());
        assert!(screen.contains("Could not fetch the posts."));
    }

    #[test]
    fn test_confirm_dialog_visible_in_confirm_mode() {
        let mut app = App::new(&TourConfig::default());
        app.mount_requests();
        app.apply(Completion::DeleteListLoaded(Ok(posts(3))));
        app.focused = Panel::Delete;
        app.delete.request_delete(1);
        app.mode = AppMode::Confirm;

        let screen = draw(&app, &mut UI::new());
        assert!(screen.contains("Are you sure you want to delete this post?"));
    }

    #[test]
    fn test_typed_text_reaches_widget() {
        let mut app = App::new(&TourConfig::default());
        let mut ui = UI::new();
        app.focused = Panel::Create;
        app.mode = AppMode::Insert;

        for c in "Hello".chars() {
            ui.handle_input(
                crossterm::event::KeyEvent::new(
                    crossterm::event::KeyCode::Char(c),
                    crossterm::event::KeyModifiers::NONE,
                ),
                &mut app,
            );
        }
        assert_eq!(app.create.title(), "Hello");

        app.apply(Completion::Created(Ok(Post {
            id: 101,
            title: "Hello".to_string(),
            body: String::new(),
            user_id: 1,
        })));
        ui.sync_from(&app);
        assert_eq!(ui.create_title.content(), "");
    }
}
