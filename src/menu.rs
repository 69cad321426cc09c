//! Game-select menu state and navigation.

use crate::games::GameKind;

/// Input actions for the menu (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select,
}

/// Menu state: which entry the highlight sits on.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    pub selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// The game under the highlight.
    pub fn selected_kind(&self) -> GameKind {
        GameKind::ALL[self.selected]
    }

    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        if self.selected + 1 < GameKind::ALL.len() {
            self.selected += 1;
        }
    }
}

/// Process a menu input. Returns the game to start, if one was chosen.
pub fn process_input(menu: &mut Menu, input: MenuInput) -> Option<GameKind> {
    match input {
        MenuInput::Up => {
            menu.navigate_up();
            None
        }
        MenuInput::Down => {
            menu.navigate_down();
            None
        }
        MenuInput::Select => Some(menu.selected_kind()),
    }
}
