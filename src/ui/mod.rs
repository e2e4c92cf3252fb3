// UI module organization
pub mod layout;
pub mod table;
pub mod components;
pub mod modals;

// Re-export the main UI function
pub use layout::render_ui;
