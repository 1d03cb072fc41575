pub mod config;
pub mod format;
pub mod menu;
pub mod run;
pub mod simulate;
