//! Command registry for dispatching input events to commands.
//!
//! Priority order for keys:
//! 1. Ctrl+C always quits
//! 2. The open modal's bindings (search editing captures printable keys)
//! 3. Global bindings
//! 4. The active tab's bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::ui::{tab_bar, LayoutContext};

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a key event to a command, or `None` if the key does nothing here.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = normalize(key);

        if context.modal == ModalType::SearchEditing {
            if let Some(cmd) = self.config.contextual(&combo, context) {
                return Some(cmd);
            }
            return match combo.code {
                KeyCode::Char(c) if combo.modifiers.is_empty() => Some(Command::InsertChar(c)),
                _ => None,
            };
        }

        if context.is_modal() {
            if let Some(cmd) = self.config.contextual(&combo, context) {
                return Some(cmd);
            }
            return self.config.global.get(&combo).copied();
        }

        self.config
            .global
            .get(&combo)
            .copied()
            .or_else(|| self.config.contextual(&combo, context))
    }

    /// Map a mouse event: clicks on the tab bar switch tabs, the wheel
    /// moves the cursor.
    pub fn dispatch_mouse(&self, event: MouseEvent, layout: &LayoutContext) -> Option<Command> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if event.row < tab_bar::HEIGHT => {
                tab_bar::tab_at(event.column, layout).map(Command::SwitchTab)
            }
            MouseEventKind::ScrollUp => Some(Command::CursorUp),
            MouseEventKind::ScrollDown => Some(Command::CursorDown),
            _ => None,
        }
    }
}

/// Drop SHIFT from character keys; the character already carries the case.
fn normalize(key: KeyEvent) -> KeyCombo {
    match key.code {
        KeyCode::Char(_) => KeyCombo::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)),
        _ => KeyCombo::new(key.code, key.modifiers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tab;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctx(tab: Tab, modal: ModalType) -> InputContext {
        InputContext::new(tab, modal)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            registry.dispatch(ctrl_c, &ctx(Tab::Facts, ModalType::SearchEditing)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_search_editing_captures_printable_keys() {
        let registry = CommandRegistry::new();
        let search = ctx(Tab::Facts, ModalType::SearchEditing);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('q')), &search),
            Some(Command::InsertChar('q'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('1')), &search),
            Some(Command::InsertChar('1'))
        );
        let upper = KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT);
        assert_eq!(
            registry.dispatch(upper, &search),
            Some(Command::InsertChar('E'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Esc), &search),
            Some(Command::Back)
        );
    }

    #[test]
    fn test_global_bindings_outside_modals() {
        let registry = CommandRegistry::new();
        let home = ctx(Tab::Home, ModalType::None);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('3')), &home),
            Some(Command::SwitchTab(Tab::Facts))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('q')), &home),
            Some(Command::Quit)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Tab), &home),
            Some(Command::NextTab)
        );
    }

    #[test]
    fn test_tab_bindings() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('r')), &ctx(Tab::Home, ModalType::None)),
            Some(Command::ReadFact)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('r')), &ctx(Tab::Quiz, ModalType::None)),
            Some(Command::RestartQuiz)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('/')), &ctx(Tab::Facts, ModalType::None)),
            Some(Command::FocusSearch)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('/')), &ctx(Tab::Home, ModalType::None)),
            None
        );
    }

    #[test]
    fn test_gallery_detail_keeps_global_keys() {
        let registry = CommandRegistry::new();
        let detail = ctx(Tab::Gallery, ModalType::GalleryDetail);
        assert_eq!(
            registry.dispatch(key(KeyCode::Esc), &detail),
            Some(Command::Back)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('2')), &detail),
            Some(Command::SwitchTab(Tab::Gallery))
        );
        assert_eq!(registry.dispatch(key(KeyCode::Right), &detail), None);
    }

    #[test]
    fn test_mouse_click_on_tab_bar() {
        let registry = CommandRegistry::new();
        let layout = LayoutContext::new(120, 40);
        let column = tab_bar::tab_ranges(&layout)[2].1.start;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            registry.dispatch_mouse(click, &layout),
            Some(Command::SwitchTab(Tab::Facts))
        );

        let below = MouseEvent { row: 10, ..click };
        assert_eq!(registry.dispatch_mouse(below, &layout), None);
    }
}
