use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fetchtour_core::{CreateForm, DeleteList, EditList, FetchList, TourConfig};
use tracing::debug;

use crate::dispatch::{Completion, Request};
use crate::mode::{AppMode, Field, Panel};

/// Main application state
pub struct App {
    pub fetch: FetchList,
    pub create: CreateForm,
    pub edit: EditList,
    pub delete: DeleteList,

    /// Current mode
    pub mode: AppMode,

    /// Which panel has focus
    pub focused: Panel,

    /// Which form field receives text in insert mode
    pub field: Field,

    /// Highlighted row in the PUT list
    pub edit_cursor: usize,

    /// Highlighted row in the DELETE list
    pub delete_cursor: usize,

    /// Status message (shown in command bar)
    pub status_message: Option<String>,

    /// Base URL shown in the status bar
    pub base_url: String,

    /// Should quit?
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &TourConfig) -> Self {
        let widgets = &config.widgets;
        Self {
            fetch: FetchList::new(widgets.list_limit),
            create: CreateForm::new(widgets.owner_id),
            edit: EditList::new(widgets.pick_limit),
            delete: DeleteList::new(widgets.pick_limit),
            mode: AppMode::Normal,
            focused: Panel::Fetch,
            field: Field::Title,
            edit_cursor: 0,
            delete_cursor: 0,
            status_message: None,
            base_url: config.api.base_url.clone(),
            should_quit: false,
        }
    }

    /// Fetches issued once when the page appears
    pub fn mount_requests(&mut self) -> Vec<Request> {
        let mut requests = Vec::new();
        if self.fetch.begin_mount() {
            requests.push(Request::LoadFetchList);
        }
        if self.edit.begin_mount() {
            requests.push(Request::LoadEditList);
        }
        if self.delete.begin_mount() {
            requests.push(Request::LoadDeleteList);
        }
        requests
    }

    /// Feed a settled request back into its widget
    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::FetchListLoaded(result) => self.fetch.finish_mount(result),
            Completion::EditListLoaded(result) => self.edit.finish_mount(result),
            Completion::DeleteListLoaded(result) => self.delete.finish_mount(result),
            Completion::Created(result) => {
                self.create.finish_submit(result);
                self.status_message = None;
            }
            Completion::Updated(result) => {
                self.edit.finish_submit(result);
                self.status_message = None;
            }
            Completion::Deleted(result) => {
                self.delete.finish_delete(result);
                self.clamp_delete_cursor();
                self.status_message = None;
            }
        }
    }

    /// Keys the focused text field should consume instead of the app
    pub fn is_text_input(&self, key: &KeyEvent) -> bool {
        if self.mode != AppMode::Insert {
            return false;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => false,
            // Enter in the title moves on to the body
            KeyCode::Enter => self.field == Field::Body,
            _ => true,
        }
    }

    /// Handle keyboard input; returns a request to dispatch, if any
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Request> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return None;
                }
                KeyCode::Char('s') => return self.submit_focused(),
                _ => {}
            }
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_mode(key),
            AppMode::Insert => self.handle_insert_mode(key),
            AppMode::Confirm => self.handle_confirm_mode(key),
        }
    }

    /// Handle normal mode keys
    fn handle_normal_mode(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            KeyCode::Tab => {
                self.focused = self.focused.next();
                self.status_message = None;
            }

            KeyCode::BackTab => {
                self.focused = self.focused.prev();
                self.status_message = None;
            }

            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),

            KeyCode::Enter if self.focused == Panel::Edit => {
                if let Some(id) = self.edit.posts().get(self.edit_cursor).map(|p| p.id) {
                    if self.edit.select(id) {
                        self.field = Field::Title;
                        self.mode = AppMode::Insert;
                        self.status_message = Some(format!("Editing post {}", id));
                    }
                }
            }

            KeyCode::Char('i') => match self.focused {
                Panel::Create => {
                    self.field = Field::Title;
                    self.mode = AppMode::Insert;
                    self.status_message = Some("-- INSERT --".to_string());
                }
                Panel::Edit if self.edit.selected().is_some() => {
                    self.mode = AppMode::Insert;
                    self.status_message = Some("-- INSERT --".to_string());
                }
                Panel::Edit => {
                    self.status_message = Some("Select a post first (Enter)".to_string());
                }
                _ => {}
            },

            KeyCode::Char('d') if self.focused == Panel::Delete => {
                if let Some(id) = self.delete.posts().get(self.delete_cursor).map(|p| p.id) {
                    if self.delete.request_delete(id) {
                        self.mode = AppMode::Confirm;
                    }
                }
            }

            _ => {}
        }
        None
    }

    /// Handle insert mode keys that are not plain text
    fn handle_insert_mode(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.status_message = None;
            }

            KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter => {
                self.field = self.field.toggle();
            }

            _ => {}
        }
        None
    }

    /// Handle the yes/no dialog
    fn handle_confirm_mode(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.mode = AppMode::Normal;
                let id = self.delete.begin_confirm()?;
                self.status_message = Some(format!("Deleting post {}...", id));
                Some(Request::Delete(id))
            }

            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.delete.decline();
                self.mode = AppMode::Normal;
                self.status_message = Some("Delete cancelled".to_string());
                None
            }

            _ => None,
        }
    }

    /// Ctrl-s: submit the form of the focused panel
    fn submit_focused(&mut self) -> Option<Request> {
        match self.focused {
            Panel::Create => {
                if !self.create.can_submit() {
                    self.status_message = Some("Title and body are both required".to_string());
                    return None;
                }
                let post = self.create.begin_submit()?;
                debug!(title = %post.title, "submitting create form");
                self.mode = AppMode::Normal;
                self.status_message = Some("Creating post...".to_string());
                Some(Request::Create(post))
            }
            Panel::Edit => {
                let post = self.edit.begin_submit()?;
                debug!(id = post.id, "submitting edit form");
                self.mode = AppMode::Normal;
                self.status_message = Some(format!("Updating post {}...", post.id));
                Some(Request::Update(post))
            }
            Panel::Fetch | Panel::Delete => None,
        }
    }

    /// Write the text of the focused field into its widget
    pub fn set_field_text(&mut self, text: String) {
        match (self.focused, self.field) {
            (Panel::Create, Field::Title) => self.create.set_title(text),
            (Panel::Create, Field::Body) => self.create.set_body(text),
            (Panel::Edit, Field::Title) => self.edit.set_title(text),
            (Panel::Edit, Field::Body) => self.edit.set_body(text),
            _ => {}
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        match self.focused {
            Panel::Edit => {
                if self.edit_cursor < self.edit.posts().len().saturating_sub(1) {
                    self.edit_cursor += 1;
                }
            }
            Panel::Delete => {
                if self.delete_cursor < self.delete.posts().len().saturating_sub(1) {
                    self.delete_cursor += 1;
                }
            }
            _ => {}
        }
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        match self.focused {
            Panel::Edit => self.edit_cursor = self.edit_cursor.saturating_sub(1),
            Panel::Delete => self.delete_cursor = self.delete_cursor.saturating_sub(1),
            _ => {}
        }
    }

    fn clamp_delete_cursor(&mut self) {
        self.delete_cursor = self
            .delete_cursor
            .min(self.delete.posts().len().saturating_sub(1));
    }
}
