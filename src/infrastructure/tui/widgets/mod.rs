pub mod boot_view;
pub mod card_view;
pub mod layout;
pub mod matrix_view;
pub mod status_bar;
pub mod terminal_view;
