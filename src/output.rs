//! Terminal output formatting for the qrtool CLI.
//!
//! Status lines are tagged `[OK]`, `[INFO]`, or `[WARN]`. The success line
//! goes to stdout; warnings and info go to stderr. Tags are coloured only
//! when the target stream is a terminal.

use std::io::{self, IsTerminal, Write};

use crate::warning::Warning;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Terminal-aware status printer.
pub struct Printer {
    stdout_color: bool,
    stderr_color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            stdout_color: io::stdout().is_terminal(),
            stderr_color: io::stderr().is_terminal(),
        }
    }

    /// Printer that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            stdout_color: false,
            stderr_color: false,
        }
    }

    /// Print a success line to stdout.
    /// e.g. "[OK] Saved QR code to qr.png"
    pub fn ok(&self, message: &str) {
        let line = format_line(self.stdout_color, GREEN, "OK", message);
        let _ = writeln!(io::stdout().lock(), "{}", line);
    }

    /// Print an informational line to stderr.
    pub fn info(&self, message: &str) {
        let line = format_line(self.stderr_color, CYAN, "INFO", message);
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }

    /// Print a warning, and its help text if any, to stderr.
    pub fn warning(&self, warning: &Warning) {
        let mut stderr = io::stderr().lock();
        let line = format_line(self.stderr_color, YELLOW, "WARN", &warning.message);
        let _ = writeln!(stderr, "{}", line);
        if let Some(help) = &warning.help {
            let _ = writeln!(stderr, "       {}", self.dim(&format!("help: {}", help)));
        }
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.stderr_color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

fn format_line(color: bool, tag_color: &str, tag: &str, message: &str) -> String {
    if color {
        format!("{BOLD}{tag_color}[{tag}]{RESET} {message}")
    } else {
        format!("[{tag}] {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        assert_eq!(
            format_line(false, GREEN, "OK", "Saved QR code to qr.png"),
            "[OK] Saved QR code to qr.png"
        );
    }

    #[test]
    fn test_coloured_line_keeps_text() {
        let line = format_line(true, YELLOW, "WARN", "logo missing");
        assert!(line.starts_with(BOLD));
        assert!(line.contains("[WARN]"));
        assert!(line.ends_with(" logo missing"));
    }

    #[test]
    fn test_plain_printer_dim_is_identity() {
        assert_eq!(Printer::plain().dim("help"), "help");
    }
}
