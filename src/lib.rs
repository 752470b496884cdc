pub mod app;
pub mod calendar;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod hitmap;
pub mod input;
pub mod logging;
pub mod share;
pub mod theme;
pub mod tui;
pub mod ui;
