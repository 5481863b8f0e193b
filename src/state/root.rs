//! Root state tree and dispatch.

use crate::catalog::Catalogs;
use crate::error::CatalogError;
use crate::models::Tab;

use super::facts::{FactsAction, FactsState};
use super::gallery::{GalleryAction, GalleryState};
use super::home::{HomeAction, HomeState};
use super::quiz::{QuizAction, QuizState};

/// The whole application state: the selected tab plus one instance of each
/// slice. Slices never reference each other.
#[derive(Debug, Clone, PartialEq)]
pub struct RootState {
    pub selected_tab: Tab,
    pub home: HomeState,
    pub gallery: GalleryState,
    pub facts: FactsState,
    pub quiz: QuizState,
}

/// Every transition the presentation layer can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootAction {
    SelectTab(Tab),
    Home(HomeAction),
    Gallery(GalleryAction),
    Facts(FactsAction),
    Quiz(QuizAction),
}

impl RootAction {
    /// The slice's `OnAppear` action for `tab`.
    pub fn on_appear(tab: Tab) -> RootAction {
        match tab {
            Tab::Home => RootAction::Home(HomeAction::OnAppear),
            Tab::Gallery => RootAction::Gallery(GalleryAction::OnAppear),
            Tab::Facts => RootAction::Facts(FactsAction::OnAppear),
            Tab::Quiz => RootAction::Quiz(QuizAction::OnAppear),
        }
    }

    /// Short name for logs: the variant path without payload.
    pub fn name(&self) -> &'static str {
        match self {
            RootAction::SelectTab(_) => "SelectTab",
            RootAction::Home(HomeAction::OnAppear) => "Home.OnAppear",
            RootAction::Home(HomeAction::FactRead) => "Home.FactRead",
            RootAction::Gallery(GalleryAction::OnAppear) => "Gallery.OnAppear",
            RootAction::Gallery(GalleryAction::SelectImage(_)) => "Gallery.SelectImage",
            RootAction::Facts(FactsAction::OnAppear) => "Facts.OnAppear",
            RootAction::Facts(FactsAction::SelectCategory(_)) => "Facts.SelectCategory",
            RootAction::Facts(FactsAction::SearchTextChanged(_)) => "Facts.SearchTextChanged",
            RootAction::Quiz(QuizAction::OnAppear) => "Quiz.OnAppear",
            RootAction::Quiz(QuizAction::SelectAnswer(_)) => "Quiz.SelectAnswer",
            RootAction::Quiz(QuizAction::NextQuestion) => "Quiz.NextQuestion",
            RootAction::Quiz(QuizAction::RestartQuiz) => "Quiz.RestartQuiz",
        }
    }
}

impl RootState {
    /// State over the built-in catalogs.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_catalogs(Catalogs::builtin())
    }

    /// State over caller-supplied catalogs, validated once here.
    pub fn with_catalogs(catalogs: Catalogs) -> Result<Self, CatalogError> {
        catalogs.validate()?;
        Ok(Self {
            selected_tab: Tab::default(),
            home: HomeState::default(),
            gallery: GalleryState::new(catalogs.gallery),
            facts: FactsState::new(catalogs.facts),
            quiz: QuizState::new(catalogs.quiz)?,
        })
    }

    /// Apply `action` in place. Only the addressed slice changes.
    pub fn reduce(&mut self, action: RootAction) {
        match action {
            RootAction::SelectTab(tab) => self.selected_tab = tab,
            RootAction::Home(action) => self.home.reduce(action),
            RootAction::Gallery(action) => self.gallery.reduce(action),
            RootAction::Facts(action) => self.facts.reduce(action),
            RootAction::Quiz(action) => self.quiz.reduce(action),
        }
    }
}

/// Pure root reducer: consumes a state and returns the next one.
pub fn dispatch(mut state: RootState, action: RootAction) -> RootState {
    state.reduce(action);
    state
}
