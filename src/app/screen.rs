// SPDX-License-Identifier: MPL-2.0
//! Screens and the back stack that moves between them.

/// Screens the user can navigate between.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Export,
    Settings,
    Scan,
    /// Receipt detail, by receipt id.
    Detail(String),
    /// Receipt editor, by receipt id.
    Edit(String),
}

impl Screen {
    /// Destinations reachable from the bottom bar, in display order.
    pub const TABS: [Screen; 4] = [Screen::Home, Screen::Scan, Screen::Export, Screen::Settings];

    /// Whether the bottom bar is shown on this screen.
    #[must_use]
    pub fn shows_bottom_bar(&self) -> bool {
        matches!(self, Screen::Home | Screen::Export | Screen::Settings)
    }

    /// Whether the floating scan button is shown on this screen.
    #[must_use]
    pub fn shows_scan_button(&self) -> bool {
        matches!(self, Screen::Home)
    }

    /// Stable route string, used in logs.
    #[must_use]
    pub fn route(&self) -> String {
        match self {
            Screen::Home => "home".to_string(),
            Screen::Export => "export".to_string(),
            Screen::Settings => "settings".to_string(),
            Screen::Scan => "scan".to_string(),
            Screen::Detail(id) => format!("receipt_detail/{id}"),
            Screen::Edit(id) => format!("receipt_edit/{id}"),
        }
    }
}

/// Back stack rooted at [`Screen::Home`]. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Home],
        }
    }

    #[must_use]
    pub fn current(&self) -> &Screen {
        // The root is never popped.
        self.stack.last().unwrap_or(&Screen::Home)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes `screen` unless it is already on top.
    pub fn navigate(&mut self, screen: Screen) {
        if *self.current() == screen {
            return;
        }
        tracing::debug!(route = %screen.route(), "navigate");
        self.stack.push(screen);
    }

    /// Pops the top screen. Returns `false` when only Home is left.
    pub fn navigate_up(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(left) = self.stack.pop() {
            tracing::debug!(route = %left.route(), "navigate up");
        }
        true
    }

    /// Bottom bar selection: pop back to Home, then push the tab.
    pub fn select_tab(&mut self, tab: Screen) {
        if *self.current() == tab {
            return;
        }
        self.stack.truncate(1);
        if tab != Screen::Home {
            self.stack.push(tab);
        }
    }

    /// Swaps the top screen for `screen`, as when a finished scan opens the
    /// receipt it produced.
    pub fn replace(&mut self, screen: Screen) {
        if self.stack.len() <= 1 {
            self.navigate(screen);
            return;
        }
        self.stack.pop();
        self.navigate(screen);
    }
}
