pub mod anki;
pub mod cli;
pub mod config;
pub mod core;
pub mod fetch;
pub mod logging;
pub mod persistence;
pub mod providers;
