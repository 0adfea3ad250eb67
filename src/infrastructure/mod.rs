pub mod profile;
pub mod tui;
