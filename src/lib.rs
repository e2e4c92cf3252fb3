// Library exports for the tokenscope screener
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod feed;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{App, SortDirection, SortKey, SortSpec, StageTab};
pub use cli::Cli;
pub use data::{Chain, LifecycleStage, PriceObservation, TokenRecord, TrendDirection};
pub use feed::MockFeed;
pub use ui::render_ui;
pub use utils::*;
