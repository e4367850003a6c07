pub mod commands;
pub mod logging;
pub mod progress;
pub mod prompt;
