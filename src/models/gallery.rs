use serde::{Deserialize, Serialize};

/// A breed shown in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub name: String,
    /// Opaque asset reference; the terminal UI draws a placeholder instead.
    pub image_ref: String,
    pub description: String,
}

impl GalleryItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image_ref: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_ref: image_ref.into(),
            description: description.into(),
        }
    }
}
