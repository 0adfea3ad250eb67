pub mod tui_controller;
