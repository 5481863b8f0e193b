//! Per-tab command handling for the App.
//!
//! Cursor and focus changes stay in [`ViewState`](super::ViewState); every
//! change to the shared state goes through [`App::dispatch`].

use tracing::{debug, warn};

use crate::input::Command;
use crate::models::Tab;
use crate::state::{FactsAction, GalleryAction, HomeAction, QuizAction, RootAction};
use crate::ui::facts::chips;
use crate::ui::gallery::gallery_columns;
use crate::ui::helpers::step_cursor;
use crate::ui::home::quick_access_columns;

use super::{App, FactsFocus, QuickAccess};

impl App {
    pub(super) fn handle_home(&mut self, command: Command) {
        let columns = quick_access_columns(&self.layout);
        let len = QuickAccess::ALL.len();
        let cursor = self.view.home_cursor;
        let (dx, dy) = match command {
            Command::CursorUp => (0, -1),
            Command::CursorDown => (0, 1),
            Command::CursorLeft => (-1, 0),
            Command::CursorRight => (1, 0),
            _ => (0, 0),
        };
        if (dx, dy) != (0, 0) {
            let next = Self::step_grid(cursor, dx, dy, columns, len);
            if next != cursor {
                self.view.home_cursor = next;
                self.mark_dirty();
            }
            return;
        }

        match command {
            Command::ReadFact => self.dispatch(RootAction::Home(HomeAction::FactRead)),
            Command::Activate => match QuickAccess::ALL.get(cursor) {
                Some(QuickAccess::Gallery) => self.select_tab(Tab::Gallery),
                Some(QuickAccess::Facts) => self.select_tab(Tab::Facts),
                Some(QuickAccess::Quiz) => self.select_tab(Tab::Quiz),
                Some(QuickAccess::About) => {
                    self.view.show_about = true;
                    self.mark_dirty();
                }
                None => {}
            },
            _ => {}
        }
    }

    pub(super) fn handle_gallery(&mut self, command: Command) {
        // The open detail sheet takes every command the registry lets through.
        if self.state.gallery.selected_item().is_some() {
            if command == Command::Back {
                self.dispatch(RootAction::Gallery(GalleryAction::SelectImage(None)));
            }
            return;
        }

        let columns = gallery_columns(&self.layout);
        let len = self.state.gallery.images.len();
        let cursor = self.view.gallery_cursor;
        let next = match command {
            Command::CursorUp => Self::step_grid(cursor, 0, -1, columns, len),
            Command::CursorDown => Self::step_grid(cursor, 0, 1, columns, len),
            Command::CursorLeft => Self::step_grid(cursor, -1, 0, columns, len),
            Command::CursorRight => Self::step_grid(cursor, 1, 0, columns, len),
            Command::Activate => {
                if let Some(item) = self.state.gallery.images.get(cursor) {
                    let id = item.id.clone();
                    self.dispatch(RootAction::Gallery(GalleryAction::SelectImage(Some(id))));
                }
                return;
            }
            Command::Back => {
                // A stale id that resolves to nothing is cleared as well.
                if self.state.gallery.selected_image.is_some() {
                    self.dispatch(RootAction::Gallery(GalleryAction::SelectImage(None)));
                }
                return;
            }
            _ => return,
        };
        if next != cursor {
            self.view.gallery_cursor = next;
            self.mark_dirty();
        }
    }

    pub(super) fn handle_facts(&mut self, command: Command) {
        match command {
            Command::CursorUp | Command::CursorDown => {
                let len = self.state.facts.filtered_facts().len();
                let delta = if command == Command::CursorUp { -1 } else { 1 };
                self.view.facts_cursor = step_cursor(self.view.facts_cursor, delta, len);
                self.mark_dirty();
            }
            Command::NextCategory => self.cycle_category(1),
            Command::PrevCategory => self.cycle_category(-1),
            Command::FocusSearch => {
                self.view.facts_focus = FactsFocus::Search;
                self.mark_dirty();
            }
            Command::InsertChar(c) => {
                let mut text = self.state.facts.search_text.clone();
                text.push(c);
                self.set_search_text(text);
            }
            Command::Backspace => {
                let mut text = self.state.facts.search_text.clone();
                if text.pop().is_some() {
                    self.set_search_text(text);
                }
            }
            Command::ClearSearch => {
                if !self.state.facts.search_text.is_empty() {
                    self.set_search_text(String::new());
                }
            }
            Command::Back => match self.view.facts_focus {
                FactsFocus::Search => {
                    self.view.facts_focus = FactsFocus::List;
                    self.mark_dirty();
                }
                FactsFocus::List => self.reset_fact_filters(),
            },
            _ => {}
        }
    }

    fn set_search_text(&mut self, text: String) {
        self.view.facts_cursor = 0;
        self.dispatch(RootAction::Facts(FactsAction::SearchTextChanged(text)));
    }

    fn cycle_category(&mut self, step: isize) {
        let all: Vec<_> = chips().collect();
        let current = all
            .iter()
            .position(|chip| *chip == self.state.facts.selected_category)
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(all.len() as isize) as usize;
        self.view.facts_cursor = 0;
        self.dispatch(RootAction::Facts(FactsAction::SelectCategory(all[next])));
    }

    fn reset_fact_filters(&mut self) {
        if self.state.facts.selected_category.is_some() {
            self.dispatch(RootAction::Facts(FactsAction::SelectCategory(None)));
        }
        if !self.state.facts.search_text.is_empty() {
            self.dispatch(RootAction::Facts(FactsAction::SearchTextChanged(String::new())));
        }
        self.view.facts_cursor = 0;
    }

    pub(super) fn handle_quiz(&mut self, command: Command) {
        let quiz = &self.state.quiz;
        let option_count = quiz.current_question().options.len();
        match command {
            Command::CursorUp | Command::CursorDown => {
                if quiz.show_result || quiz.quiz_completed {
                    return;
                }
                let delta = if command == Command::CursorUp { -1 } else { 1 };
                self.view.quiz_cursor = step_cursor(self.view.quiz_cursor, delta, option_count);
                self.mark_dirty();
            }
            Command::ChooseAnswer(index) => self.choose_answer(index),
            Command::Activate => {
                if quiz.quiz_completed {
                    self.restart_quiz();
                } else if quiz.show_result {
                    self.next_question();
                } else {
                    self.choose_answer(self.view.quiz_cursor);
                }
            }
            Command::NextQuestion => self.next_question(),
            Command::RestartQuiz => self.restart_quiz(),
            _ => {}
        }
    }

    /// Submit an answer unless one is already showing. The reducer scores
    /// every `SelectAnswer`, so this is the only guard against counting a
    /// question twice.
    fn choose_answer(&mut self, index: usize) {
        let quiz = &self.state.quiz;
        if quiz.quiz_completed {
            debug!(index, "answer ignored: quiz completed");
            return;
        }
        if quiz.show_result {
            warn!(
                index,
                question = quiz.current_question_index,
                "answer ignored: result already shown"
            );
            return;
        }
        if index >= quiz.current_question().options.len() {
            debug!(index, "answer ignored: no such option");
            return;
        }
        self.view.quiz_cursor = index;
        self.dispatch(RootAction::Quiz(QuizAction::SelectAnswer(index)));
    }

    /// Advance only after the answer was revealed, as the button only
    /// exists then.
    fn next_question(&mut self) {
        let quiz = &self.state.quiz;
        if !quiz.show_result || quiz.quiz_completed {
            debug!("next question ignored: no answer shown");
            return;
        }
        self.view.quiz_cursor = 0;
        self.dispatch(RootAction::Quiz(QuizAction::NextQuestion));
    }

    fn restart_quiz(&mut self) {
        self.view.quiz_cursor = 0;
        self.dispatch(RootAction::Quiz(QuizAction::RestartQuiz));
    }
}
