// App module structure for better organization

pub mod types;
pub mod core;
pub mod sorting;
pub mod navigation;
pub mod input;

// Re-export the main App struct and key types
pub use core::App;
pub use types::{SortDirection, SortKey, SortSpec, StageTab};
