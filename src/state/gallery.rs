//! Gallery slice: a fixed list of breeds and an optional open detail sheet.

use std::sync::Arc;

use crate::catalog::GALLERY;
use crate::models::GalleryItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    pub images: Arc<[GalleryItem]>,
    /// Id of the item whose detail sheet is open. Not validated against
    /// `images`; an unknown id resolves to no detail.
    pub selected_image: Option<String>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(Arc::clone(&GALLERY))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    SelectImage(Option<String>),
    OnAppear,
}

impl GalleryState {
    pub fn new(images: Arc<[GalleryItem]>) -> Self {
        Self {
            images,
            selected_image: None,
        }
    }

    pub fn reduce(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::SelectImage(id) => self.selected_image = id,
            GalleryAction::OnAppear => {}
        }
    }

    /// The catalog entry for `selected_image`, if it names one.
    pub fn selected_item(&self) -> Option<&GalleryItem> {
        let id = self.selected_image.as_deref()?;
        self.images.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_clear() {
        let mut state = GalleryState::default();
        state.reduce(GalleryAction::SelectImage(Some("3".to_string())));
        assert_eq!(state.selected_item().map(|i| i.name.as_str()), Some("Brahma"));

        state.reduce(GalleryAction::SelectImage(None));
        assert_eq!(state.selected_image, None);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_unknown_id_is_stored_but_resolves_to_nothing() {
        let mut state = GalleryState::default();
        state.reduce(GalleryAction::SelectImage(Some("42".to_string())));
        assert_eq!(state.selected_image.as_deref(), Some("42"));
        assert!(state.selected_item().is_none());
    }
}
