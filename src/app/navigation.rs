//! Row, tab, sort, and modal navigation.

use super::core::App;
use crate::config::PAGE_SIZE;

impl App {
    // Row navigation
    pub fn next_row(&mut self) {
        if !self.visible.is_empty() {
            self.selected_row = (self.selected_row + 1) % self.visible.len();
            self.needs_redraw = true;
        }
    }

    pub fn previous_row(&mut self) {
        if !self.visible.is_empty() {
            self.selected_row = if self.selected_row == 0 {
                self.visible.len() - 1
            } else {
                self.selected_row - 1
            };
            self.needs_redraw = true;
        }
    }

    pub fn page_down(&mut self) {
        if !self.visible.is_empty() {
            self.selected_row = std::cmp::min(self.selected_row + PAGE_SIZE, self.visible.len() - 1);
            self.needs_redraw = true;
        }
    }

    pub fn page_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(PAGE_SIZE);
        self.needs_redraw = true;
    }

    // Stage tab navigation
    pub fn next_stage_tab(&mut self) {
        self.stage_tab = self.stage_tab.next();
        self.selected_row = 0;
        self.refresh_visible();
        self.needs_redraw = true;
    }

    pub fn previous_stage_tab(&mut self) {
        self.stage_tab = self.stage_tab.previous();
        self.selected_row = 0;
        self.refresh_visible();
        self.needs_redraw = true;
    }

    // Sort intents; both funnel through apply_sort_key so the
    // same-key-toggles / new-key-defaults contract lives in one place.
    pub fn select_next_sort_key(&mut self) {
        self.apply_sort_key(self.sort.key.next());
    }

    pub fn select_previous_sort_key(&mut self) {
        self.apply_sort_key(self.sort.key.previous());
    }

    pub fn toggle_sort_direction(&mut self) {
        self.apply_sort_key(self.sort.key);
    }

    // Modal state
    pub fn open_details(&mut self) {
        if self.selected_token().is_some() {
            self.show_details = true;
            self.needs_redraw = true;
        }
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
        self.needs_redraw = true;
    }

    pub fn close_modals(&mut self) {
        if self.show_details || self.show_filters {
            self.show_details = false;
            self.show_filters = false;
            self.needs_redraw = true;
        }
    }

    pub fn modal_open(&self) -> bool {
        self.show_details || self.show_filters
    }
}
