//! Default keybindings.
//!
//! Maps key combinations to [`Command`]s in three layers: global bindings,
//! bindings per [`ModalType`], and bindings per tab.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::{InputContext, ModalType};
use crate::models::Tab;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active unless a modal captures the key first
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Keybindings per tab when no modal is open
    pub tab: HashMap<Tab, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            tab: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_tab_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global.insert(KeyCombo::char('q'), Command::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Tab), Command::NextTab);
        self.global
            .insert(KeyCombo::plain(KeyCode::BackTab), Command::PrevTab);
        self.global
            .insert(KeyCombo::shift(KeyCode::BackTab), Command::PrevTab);
        self.global.insert(KeyCombo::char('?'), Command::ToggleAbout);
        self.global
            .insert(KeyCombo::shift(KeyCode::Char('?')), Command::ToggleAbout);

        for (digit, tab) in ['1', '2', '3', '4'].into_iter().zip(Tab::ALL) {
            self.global
                .insert(KeyCombo::char(digit), Command::SwitchTab(tab));
        }
    }

    fn setup_modal_bindings(&mut self) {
        // Search field: printable characters are handled by the registry
        let mut search = HashMap::new();
        search.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        search.insert(KeyCombo::plain(KeyCode::Enter), Command::Back);
        search.insert(KeyCombo::plain(KeyCode::Down), Command::Back);
        search.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        search.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearSearch);
        search.insert(KeyCombo::plain(KeyCode::Tab), Command::NextTab);
        search.insert(KeyCombo::shift(KeyCode::BackTab), Command::PrevTab);
        self.modal.insert(ModalType::SearchEditing, search);

        let mut detail = HashMap::new();
        detail.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        detail.insert(KeyCombo::plain(KeyCode::Enter), Command::Back);
        detail.insert(KeyCombo::plain(KeyCode::Backspace), Command::Back);
        self.modal.insert(ModalType::GalleryDetail, detail);

        let mut about = HashMap::new();
        about.insert(KeyCombo::plain(KeyCode::Esc), Command::ToggleAbout);
        about.insert(KeyCombo::plain(KeyCode::Enter), Command::ToggleAbout);
        self.modal.insert(ModalType::About, about);
    }

    fn setup_tab_bindings(&mut self) {
        let mut home = arrow_bindings();
        home.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        home.insert(KeyCombo::char('r'), Command::ReadFact);
        home.insert(KeyCombo::char(' '), Command::ReadFact);
        self.tab.insert(Tab::Home, home);

        let mut gallery = arrow_bindings();
        gallery.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        gallery.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.tab.insert(Tab::Gallery, gallery);

        let mut facts = HashMap::new();
        facts.insert(KeyCombo::plain(KeyCode::Up), Command::CursorUp);
        facts.insert(KeyCombo::plain(KeyCode::Down), Command::CursorDown);
        facts.insert(KeyCombo::char('k'), Command::CursorUp);
        facts.insert(KeyCombo::char('j'), Command::CursorDown);
        facts.insert(KeyCombo::plain(KeyCode::Right), Command::NextCategory);
        facts.insert(KeyCombo::plain(KeyCode::Left), Command::PrevCategory);
        facts.insert(KeyCombo::char(']'), Command::NextCategory);
        facts.insert(KeyCombo::char('['), Command::PrevCategory);
        facts.insert(KeyCombo::char('/'), Command::FocusSearch);
        facts.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.tab.insert(Tab::Facts, facts);

        let mut quiz = HashMap::new();
        quiz.insert(KeyCombo::plain(KeyCode::Up), Command::CursorUp);
        quiz.insert(KeyCombo::plain(KeyCode::Down), Command::CursorDown);
        quiz.insert(KeyCombo::char('k'), Command::CursorUp);
        quiz.insert(KeyCombo::char('j'), Command::CursorDown);
        quiz.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        quiz.insert(KeyCombo::char('n'), Command::NextQuestion);
        quiz.insert(KeyCombo::char('r'), Command::RestartQuiz);
        for (i, c) in ['a', 'b', 'c', 'd', 'e', 'f'].into_iter().enumerate() {
            quiz.insert(KeyCombo::char(c), Command::ChooseAnswer(i));
        }
        self.tab.insert(Tab::Quiz, quiz);
    }

    /// Look up `combo` in the modal layer if a modal is open, else in the
    /// tab layer.
    pub fn contextual(&self, combo: &KeyCombo, context: &InputContext) -> Option<Command> {
        if context.is_modal() {
            self.modal.get(&context.modal)?.get(combo).copied()
        } else {
            self.tab.get(&context.tab)?.get(combo).copied()
        }
    }
}

fn arrow_bindings() -> HashMap<KeyCombo, Command> {
    let mut map = HashMap::new();
    map.insert(KeyCombo::plain(KeyCode::Up), Command::CursorUp);
    map.insert(KeyCombo::plain(KeyCode::Down), Command::CursorDown);
    map.insert(KeyCombo::plain(KeyCode::Left), Command::CursorLeft);
    map.insert(KeyCombo::plain(KeyCode::Right), Command::CursorRight);
    map.insert(KeyCombo::char('k'), Command::CursorUp);
    map.insert(KeyCombo::char('j'), Command::CursorDown);
    map.insert(KeyCombo::char('h'), Command::CursorLeft);
    map.insert(KeyCombo::char('l'), Command::CursorRight);
    map
}

/// Footer hints for the given context, as (key, description) pairs.
pub fn hints(context: &InputContext) -> Vec<(&'static str, &'static str)> {
    match context.modal {
        ModalType::SearchEditing => vec![
            ("type", "search"),
            ("Ctrl+U", "clear"),
            ("Enter/Esc", "done"),
        ],
        ModalType::GalleryDetail => vec![("Esc", "close")],
        ModalType::About => vec![("Esc", "close")],
        ModalType::None => {
            let mut keys = match context.tab {
                Tab::Home => vec![("r", "read fact"), ("↑↓←→", "move"), ("Enter", "open")],
                Tab::Gallery => vec![("↑↓←→", "move"), ("Enter", "details")],
                Tab::Facts => vec![("/", "search"), ("←→", "category"), ("Esc", "reset")],
                Tab::Quiz => vec![("a-d", "answer"), ("Enter", "confirm"), ("r", "restart")],
            };
            keys.push(("Tab/1-4", "switch"));
            keys.push(("q", "quit"));
            keys
        }
    }
}
