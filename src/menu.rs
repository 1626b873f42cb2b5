//! Presentation-card dropdown menu state.
//!
//! Each presentation card carries an action menu. At most one menu is
//! open at a time: opening a menu closes whichever was open, and a
//! click outside closes them all.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// An entry in a card's dropdown menu. Wire names are the Spanish
/// action identifiers the presentation server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Present,
    Edit,
    Duplicate,
    Download,
    Share,
    Delete,
}

impl MenuAction {
    /// Parse a wire action name. Unknown names are dropped.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "presentar" => Some(Self::Present),
            "editar" => Some(Self::Edit),
            "duplicar" => Some(Self::Duplicate),
            "descargar" => Some(Self::Download),
            "compartir" => Some(Self::Share),
            "eliminar" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Wire name of this action.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Present => "presentar",
            Self::Edit => "editar",
            Self::Duplicate => "duplicar",
            Self::Download => "descargar",
            Self::Share => "compartir",
            Self::Delete => "eliminar",
        }
    }

    /// Destructive actions prompt before running.
    #[must_use]
    pub fn requires_confirmation(self) -> bool {
        matches!(self, Self::Delete)
    }
}

/// Tracks which card's menu is open, if any.
#[derive(Debug, Default)]
pub struct MenuController {
    open: Option<u64>,
}

impl MenuController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the menu for `card`. Opening it closes any other open
    /// menu; toggling the open one closes it.
    pub fn toggle(&mut self, card: u64) {
        if self.open == Some(card) {
            self.open = None;
        } else {
            self.open = Some(card);
        }
    }

    /// A click landed outside every menu.
    pub fn close_all(&mut self) {
        self.open = None;
    }

    #[must_use]
    pub fn is_open(&self, card: u64) -> bool {
        self.open == Some(card)
    }

    #[must_use]
    pub fn open_card(&self) -> Option<u64> {
        self.open
    }

    /// Resolve a menu click: only the open card's menu can act, and the
    /// menu closes once the action is chosen.
    pub fn select(&mut self, card: u64, action: &str) -> Option<MenuAction> {
        if self.open != Some(card) {
            return None;
        }
        let action = MenuAction::parse(action)?;
        self.open = None;
        Some(action)
    }
}
