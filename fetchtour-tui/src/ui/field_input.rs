use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::TextArea;

/// A labelled text field backed by tui-textarea
pub struct FieldInput<'a> {
    pub textarea: TextArea<'a>,
    label: &'static str,
    placeholder: &'static str,
}

impl<'a> FieldInput<'a> {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(placeholder);
        textarea.set_cursor_line_style(Style::default());
        Self {
            textarea,
            label,
            placeholder,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, editing: bool) {
        let border_color = if editing { Color::Green } else { Color::DarkGray };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.label))
                .border_style(Style::default().fg(border_color)),
        );

        // Only the field being edited shows a cursor
        if editing {
            self.textarea
                .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            self.textarea.set_cursor_style(Style::default());
        }

        f.render_widget(&self.textarea, area);
    }

    /// Handle key input (only when in insert mode and focused)
    pub fn handle_input(&mut self, key: crossterm::event::KeyEvent) {
        self.textarea.input(key);
    }

    /// Get current content
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the content when the widget state moved on without us
    /// (a reset after submit, a new selection).
    pub fn sync(&mut self, value: &str) {
        if self.content() == value {
            return;
        }

        let mut new_textarea = TextArea::from(value.split('\n').map(|s| s.to_string()));
        new_textarea.set_placeholder_text(self.placeholder);
        new_textarea.set_cursor_line_style(Style::default());
        new_textarea.move_cursor(tui_textarea::CursorMove::Bottom);
        new_textarea.move_cursor(tui_textarea::CursorMove::End);

        self.textarea = new_textarea;
    }
}
