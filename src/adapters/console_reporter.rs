//! Colored terminal output for the `Reporter` port.

use colored::Colorize;

use crate::ports::Reporter;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn step(&self, number: usize, message: &str) {
        println!("\n{} {}", format!("[{}]", number).cyan().bold(), message.bold());
    }

    fn info(&self, message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message.red());
    }

    fn line(&self, message: &str) {
        println!("{}", message);
    }
}
