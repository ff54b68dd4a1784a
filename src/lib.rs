pub mod app;
pub mod config;
pub mod formula;
pub mod interpret;
pub mod suggest;
pub mod ui;
