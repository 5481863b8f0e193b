//! Domain value types shared by the catalogs, the reducers and the views.

mod fact;
mod gallery;
mod quiz;
mod tab;

pub use fact::{Fact, FactCategory};
pub use gallery::GalleryItem;
pub use quiz::QuizQuestion;
pub use tab::Tab;
