//! Application state and reducers.
//!
//! A single [`RootState`] is composed of four independent slices. Each slice
//! is changed only through its own action enum and `reduce` method; the root
//! reducer handles tab selection and forwards everything else to exactly one
//! slice.
//!
//! - [`HomeState`] / [`HomeAction`] - dashboard counters
//! - [`GalleryState`] / [`GalleryAction`] - selected breed
//! - [`FactsState`] / [`FactsAction`] - category filter and search
//! - [`QuizState`] / [`QuizAction`] - question progress and score

mod facts;
mod gallery;
mod home;
mod quiz;
mod root;

pub use facts::{filter_by_category, filter_by_search, FactsAction, FactsState};
pub use gallery::{GalleryAction, GalleryState};
pub use home::{HomeAction, HomeState};
pub use quiz::{Grade, QuizAction, QuizPhase, QuizState};
pub use root::{dispatch, RootAction, RootState};
