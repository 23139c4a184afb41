pub mod controller;
pub mod events;
pub mod modal;
pub mod notice;
pub mod state;
