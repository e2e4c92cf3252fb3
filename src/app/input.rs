use anyhow::Result;
use crossterm::event::KeyCode;
use crate::App;

impl App {
    /// Returns `Ok(false)` when the user asked to exit.
    pub fn handle_key_input(&mut self, key_code: KeyCode) -> Result<bool> {
        // Modal views capture input first.
        if self.modal_open() {
            match key_code {
                KeyCode::Char('q') => return Ok(false),
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => self.close_modals(),
                _ => {}
            }
            return Ok(true);
        }

        match key_code {
            KeyCode::Char('q') => return Ok(false),
            KeyCode::Left | KeyCode::Char('h') => self.previous_stage_tab(),
            KeyCode::Right | KeyCode::Char('l') => self.next_stage_tab(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_row(),
            KeyCode::Down | KeyCode::Char('j') => self.next_row(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Char('s') => self.select_next_sort_key(),
            KeyCode::Char('S') => self.select_previous_sort_key(),
            KeyCode::Char('d') => self.toggle_sort_direction(),
            KeyCode::Char('f') => self.toggle_filters(),
            KeyCode::Enter => self.open_details(),
            _ => {}
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    fn test_app() -> App {
        let cli = Cli {
            interval: 1.0,
            tokens: 6,
            seed: Some(3),
        };
        let mut app = App::new(&cli);
        app.tokens = app.feed.initialize(6);
        app.is_loading = false;
        app.refresh_visible();
        app
    }

    #[test]
    fn q_requests_exit() {
        let mut app = test_app();
        assert!(!app.handle_key_input(KeyCode::Char('q')).unwrap());
    }

    #[test]
    fn enter_opens_and_esc_closes_details() {
        let mut app = test_app();
        assert!(app.handle_key_input(KeyCode::Enter).unwrap());
        assert!(app.show_details);

        assert!(app.handle_key_input(KeyCode::Esc).unwrap());
        assert!(!app.show_details);
    }

    #[test]
    fn navigation_keys_are_ignored_while_modal_is_open() {
        let mut app = test_app();
        app.handle_key_input(KeyCode::Enter).unwrap();
        let tab_before = app.stage_tab;

        app.handle_key_input(KeyCode::Right).unwrap();
        assert_eq!(app.stage_tab, tab_before);
    }

    #[test]
    fn tab_keys_cycle_stage_filter() {
        let mut app = test_app();
        let start = app.stage_tab;
        app.handle_key_input(KeyCode::Right).unwrap();
        assert_eq!(app.stage_tab, start.next());
        app.handle_key_input(KeyCode::Left).unwrap();
        assert_eq!(app.stage_tab, start);
    }
}
