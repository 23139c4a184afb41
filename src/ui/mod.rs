pub mod app_shell;
pub mod card_view;
