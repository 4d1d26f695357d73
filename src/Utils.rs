//! different utility modules used throughout the project
/// terminal and file logging set up with simplelog
pub mod logger;
