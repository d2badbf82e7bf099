//! CLI console utilities

use colored::*;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Print a header
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!("{}", "=".repeat(title.chars().count()).dimmed());
}

/// Print an aligned key/value line
pub fn field(key: &str, value: impl std::fmt::Display) {
    println!("  {:<16} {}", format!("{}:", key).dimmed(), value);
}
