//! Library components for the course explorer CLI.

pub mod logging;
pub mod render;
