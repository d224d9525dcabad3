// Presentation layer - CLI and Markdown output
pub mod cli;
pub mod commands;
pub mod markdown;
