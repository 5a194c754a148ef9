pub mod config;
pub mod format;
pub mod state;
pub mod upstream;
