//! Tab switching and cursor movement for the App.

use crate::models::Tab;
use crate::state::RootAction;
use crate::ui::helpers::step_cursor;

use super::{App, FactsFocus};

impl App {
    /// Show `tab`. Switching dispatches `SelectTab` followed by the new
    /// tab's `OnAppear`; selecting the visible tab does nothing.
    pub fn select_tab(&mut self, tab: Tab) {
        // Any switch ends search editing and closes the about panel.
        self.view.facts_focus = FactsFocus::List;
        self.view.show_about = false;
        if self.state.selected_tab == tab {
            return;
        }
        self.dispatch(RootAction::SelectTab(tab));
        self.dispatch(RootAction::on_appear(tab));
    }

    /// Move a grid cursor. Horizontal steps clamp at the ends; a vertical
    /// step that would leave the grid keeps the cursor where it is.
    pub(super) fn step_grid(
        cursor: usize,
        dx: isize,
        dy: isize,
        columns: usize,
        len: usize,
    ) -> usize {
        if dy == 0 {
            return step_cursor(cursor, dx, len);
        }
        match cursor.checked_add_signed(dy * columns as isize) {
            Some(target) if target < len => target,
            _ => cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::input::Command;

    #[test]
    fn test_switching_dispatches_select_and_appear() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        let before = app.store().dispatch_count();
        app.select_tab(Tab::Facts);
        assert_eq!(app.state().selected_tab, Tab::Facts);
        assert_eq!(app.store().dispatch_count(), before + 2);
    }

    #[test]
    fn test_selecting_visible_tab_is_a_no_op() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        let before = app.store().dispatch_count();
        app.select_tab(Tab::Home);
        assert_eq!(app.store().dispatch_count(), before);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        app.execute(Command::PrevTab);
        assert_eq!(app.state().selected_tab, Tab::Quiz);
        app.execute(Command::NextTab);
        assert_eq!(app.state().selected_tab, Tab::Home);
    }

    #[test]
    fn test_step_grid() {
        assert_eq!(App::step_grid(0, 1, 0, 2, 4), 1);
        assert_eq!(App::step_grid(0, 0, 1, 2, 4), 2);
        assert_eq!(App::step_grid(3, 0, 1, 2, 4), 3);
        assert_eq!(App::step_grid(1, 0, -1, 2, 4), 1);
        assert_eq!(App::step_grid(3, 0, -1, 2, 4), 1);
        assert_eq!(App::step_grid(3, 1, 0, 2, 4), 3);
    }
}
