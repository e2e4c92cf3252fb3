//! Core application state and the timer-gated update cycle.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use cli_log::*;
use tokio::task::JoinHandle;

use crate::cli::Cli;
use crate::config::INITIAL_LOAD_DELAY_MS;
use crate::data::{PriceObservation, TokenRecord};
use crate::feed::MockFeed;
use super::sorting;
use super::types::{SortKey, SortSpec, StageTab};

pub struct App {
    // Feed and data
    pub feed: MockFeed,
    pub tokens: Vec<TokenRecord>,
    pub observations: HashMap<u64, PriceObservation>,

    // Derived row order (indices into tokens)
    pub visible: Vec<usize>,

    // Sort and filter state
    pub sort: SortSpec,
    pub stage_tab: StageTab,

    // UI state
    pub selected_row: usize,
    pub show_details: bool,
    pub show_filters: bool,
    pub needs_redraw: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,

    // Timing
    pub last_tick: Instant,
    pub tick_interval: Duration,
    token_count: usize,
    load_task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        let seed = cli.seed.unwrap_or_else(rand::random);
        info!("Seeding mock feed with {seed}");

        Self {
            feed: MockFeed::new(seed),
            tokens: Vec::new(),
            observations: HashMap::new(),
            visible: Vec::new(),
            sort: SortSpec::default(),
            stage_tab: StageTab::default(),
            selected_row: 0,
            show_details: false,
            show_filters: false,
            needs_redraw: true,
            is_loading: true,
            error_message: None,
            last_tick: Instant::now(),
            tick_interval: Duration::from_secs_f64(cli.interval),
            token_count: cli.tokens,
            load_task: None,
        }
    }

    /// Kicks off the simulated initial load; the table stays in the skeleton
    /// state until the one-shot delay elapses.
    pub fn begin_initial_load(&mut self) {
        let delay = Duration::from_millis(INITIAL_LOAD_DELAY_MS);
        self.load_task = Some(tokio::spawn(tokio::time::sleep(delay)));
    }

    /// Timer-gated update: polls the one-shot load task, then applies the
    /// repeating feed tick once the interval has elapsed. Ticks against an
    /// empty universe are skipped outright.
    pub async fn update(&mut self) -> Result<()> {
        self.poll_initial_load().await;

        if self.is_loading || self.error_message.is_some() || self.tokens.is_empty() {
            return Ok(());
        }

        if self.last_tick.elapsed() >= self.tick_interval {
            self.observations = self.feed.tick(&mut self.tokens);
            self.last_tick = Instant::now();
            self.refresh_visible();
            self.needs_redraw = true;
        }

        Ok(())
    }

    async fn poll_initial_load(&mut self) {
        let Some(task) = self.load_task.take_if(|task| task.is_finished()) else {
            return;
        };

        match task.await {
            Ok(()) => {
                self.tokens = self.feed.initialize(self.token_count);
                self.is_loading = false;
                self.last_tick = Instant::now();
                self.refresh_visible();
                info!("Initial universe loaded: {} tokens", self.tokens.len());
            }
            Err(e) => {
                self.is_loading = false;
                self.error_message = Some(format!("Failed to load token feed: {e}"));
                warn!("Initial load task failed: {e}");
            }
        }
        self.needs_redraw = true;
    }

    /// Recomputes the visible row order from the full list.
    pub fn refresh_visible(&mut self) {
        let order = sorting::sorted_indices(&self.tokens, self.sort);
        self.visible = sorting::filter_indices(&self.tokens, &order, self.stage_tab);
        if self.selected_row >= self.visible.len() {
            self.selected_row = self.visible.len().saturating_sub(1);
        }
    }

    /// Selecting the active key toggles direction; a new key resets to its
    /// type-dependent default.
    pub fn apply_sort_key(&mut self, key: SortKey) {
        if self.sort.key == key {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortSpec {
                key,
                direction: key.default_direction(),
            };
        }
        self.refresh_visible();
        self.needs_redraw = true;
    }

    pub fn selected_token(&self) -> Option<&TokenRecord> {
        self.visible.get(self.selected_row).map(|&i| &self.tokens[i])
    }

    pub fn selected_observation(&self) -> Option<&PriceObservation> {
        self.selected_token().and_then(|t| self.observations.get(&t.id))
    }

    /// Cancels the outstanding load timer so teardown never races it.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::SortDirection;

    fn test_app(token_count: usize) -> App {
        let cli = Cli {
            interval: 1.0,
            tokens: token_count,
            seed: Some(7),
        };
        let mut app = App::new(&cli);
        app.tokens = app.feed.initialize(token_count);
        app.is_loading = false;
        app.refresh_visible();
        app
    }

    #[test]
    fn default_view_shows_everything_by_market_cap() {
        let app = test_app(9);
        assert_eq!(app.visible.len(), 9);

        let caps: Vec<f64> = app.visible.iter().map(|&i| app.tokens[i].market_cap).collect();
        assert!(caps.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn same_key_toggles_new_key_resets_to_default() {
        let mut app = test_app(6);
        assert_eq!(app.sort.direction, SortDirection::Descending);

        app.apply_sort_key(SortKey::MarketCap);
        assert_eq!(app.sort.key, SortKey::MarketCap);
        assert_eq!(app.sort.direction, SortDirection::Ascending);

        app.apply_sort_key(SortKey::Name);
        assert_eq!(app.sort.key, SortKey::Name);
        assert_eq!(app.sort.direction, SortDirection::Ascending);

        app.apply_sort_key(SortKey::Score);
        assert_eq!(app.sort.direction, SortDirection::Descending);
    }

    #[test]
    fn market_cap_header_scenario() {
        let mut app = test_app(3);
        app.tokens[0].market_cap = 100.0;
        app.tokens[1].market_cap = 300.0;
        app.tokens[2].market_cap = 200.0;
        app.refresh_visible();

        let caps = |app: &App| -> Vec<f64> {
            app.visible.iter().map(|&i| app.tokens[i].market_cap).collect()
        };
        assert_eq!(caps(&app), vec![300.0, 200.0, 100.0]);

        // One re-selection of the active column flips to ascending.
        app.apply_sort_key(SortKey::MarketCap);
        assert_eq!(caps(&app), vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn tab_switch_clamps_selection() {
        let mut app = test_app(9);
        app.selected_row = 8;
        app.stage_tab = StageTab::Migrated;
        app.refresh_visible();

        assert!(app.visible.len() < 9);
        assert!(app.selected_row < app.visible.len());
    }

    #[tokio::test]
    async fn update_skips_empty_universe() {
        let mut app = test_app(0);
        assert!(app.tokens.is_empty());

        app.update().await.expect("update");
        assert!(app.observations.is_empty());
        assert!(app.visible.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn initial_load_completes_after_delay() {
        let cli = Cli {
            interval: 1.0,
            tokens: 5,
            seed: Some(11),
        };
        let mut app = App::new(&cli);
        app.begin_initial_load();
        assert!(app.is_loading);

        // Paused-clock auto-advance fires the one-shot sleep.
        while app.is_loading {
            tokio::time::sleep(Duration::from_millis(100)).await;
            app.update().await.expect("update");
        }
        assert_eq!(app.tokens.len(), 5);
        assert_eq!(app.visible.len(), 5);
    }
}
