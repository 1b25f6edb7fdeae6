/// Application modes (vim-inspired)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Move between panels and list entries
    Normal,

    /// Type into the focused form
    Insert,

    /// Yes/no dialog before a delete
    Confirm,
}

impl AppMode {
    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            AppMode::Normal => "NORMAL",
            AppMode::Insert => "INSERT",
            AppMode::Confirm => "CONFIRM",
        }
    }

    /// Get color for status bar (in ratatui Color enum)
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AppMode::Normal => Color::Cyan,
            AppMode::Insert => Color::Green,
            AppMode::Confirm => Color::Red,
        }
    }
}

/// The four widgets, top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Fetch,
    Create,
    Edit,
    Delete,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Fetch, Panel::Create, Panel::Edit, Panel::Delete];

    pub fn next(&self) -> Self {
        match self {
            Panel::Fetch => Panel::Create,
            Panel::Create => Panel::Edit,
            Panel::Edit => Panel::Delete,
            Panel::Delete => Panel::Fetch,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Panel::Fetch => Panel::Delete,
            Panel::Create => Panel::Fetch,
            Panel::Edit => Panel::Create,
            Panel::Delete => Panel::Edit,
        }
    }

    /// HTTP verb the panel demonstrates
    pub fn verb(&self) -> &'static str {
        match self {
            Panel::Fetch => "GET",
            Panel::Create => "POST",
            Panel::Edit => "PUT",
            Panel::Delete => "DELETE",
        }
    }
}

/// Which form field receives typed text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Body,
}

impl Field {
    pub fn toggle(&self) -> Self {
        match self {
            Field::Title => Field::Body,
            Field::Body => Field::Title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_cycle_visits_all() {
        let mut panel = Panel::Fetch;
        for expected in Panel::ALL.iter().cycle().skip(1).take(4) {
            panel = panel.next();
            assert_eq!(panel, *expected);
        }
        assert_eq!(Panel::Fetch.prev(), Panel::Delete);
        assert_eq!(Panel::Delete.prev().next(), Panel::Delete);
    }
}
