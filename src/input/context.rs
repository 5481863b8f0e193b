//! Input context for choosing which bindings apply.

use crate::app::{FactsFocus, ViewState};
use crate::models::Tab;
use crate::state::RootState;

/// An overlay or mode that captures keys before the tab's own bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// Typing into the facts search field
    SearchEditing,
    /// Gallery detail sheet is open
    GalleryDetail,
    /// About panel is open
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub tab: Tab,
    pub modal: ModalType,
}

impl InputContext {
    pub fn new(tab: Tab, modal: ModalType) -> Self {
        Self { tab, modal }
    }

    /// Derive the context from the current snapshot and view state.
    ///
    /// The about panel wins over everything; the gallery detail only counts
    /// when the selected id resolves to a catalog entry.
    pub fn from_state(state: &RootState, view: &ViewState) -> Self {
        let modal = if view.show_about {
            ModalType::About
        } else {
            match state.selected_tab {
                Tab::Facts if view.facts_focus == FactsFocus::Search => ModalType::SearchEditing,
                Tab::Gallery if state.gallery.selected_item().is_some() => {
                    ModalType::GalleryDetail
                }
                _ => ModalType::None,
            }
        };
        Self::new(state.selected_tab, modal)
    }

    pub fn is_modal(&self) -> bool {
        self.modal != ModalType::None
    }
}
