//! Leveled console output for user-facing messages.

use colored::Colorize;

/// Sink for user-facing messages. Injected into the pipeline so tests
/// can capture output instead of printing.
pub trait Console {
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn plain(&self, message: &str);
    fn title(&self, message: &str);
    fn step(&self, step: usize, total: usize, message: &str);
}

/// Terminal implementation with colored level markers.
#[derive(Debug, Default)]
pub struct TermConsole;

impl TermConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TermConsole {
    fn info(&self, message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    fn error(&self, message: &str) {
        println!("{} {}", "✗".red(), message);
    }

    fn plain(&self, message: &str) {
        println!("{}", message);
    }

    fn title(&self, message: &str) {
        println!("\n{}\n", message.cyan().bold());
    }

    fn step(&self, step: usize, total: usize, message: &str) {
        println!("{} {}", format!("[{}/{}]", step, total).cyan(), message);
    }
}
