pub mod cli;
pub mod config;
pub mod counters;
pub mod host;
pub mod logging;
pub mod testing;
pub mod ui;
