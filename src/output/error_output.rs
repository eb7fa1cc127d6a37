//! Diagnostics on stderr: errors, warnings and verbose progress notes.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;

/// Stderr diagnostics formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: match mode {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => Self::stderr_supports_color(),
            },
        }
    }

    /// Auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org: presence of the variable disables color
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    pub fn print_error(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message);
    }

    pub fn print_info(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_info(&mut stderr, message);
    }

    /// Writes an error to `w`. Write failures are ignored: there is nowhere
    /// left to report them.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_trailer(w, detail, suggestion);
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
    }

    pub fn write_info<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(w, "{}· {message}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "· {message}");
        }
    }

    fn write_trailer<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Prints an error with optional detail and suggestion.
pub fn print_error_full(
    mode: ColorMode,
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    ErrorOutput::new(mode).print_error(error_type, message, detail, suggestion);
}

pub fn print_warning(mode: ColorMode, message: &str) {
    ErrorOutput::new(mode).print_warning(message);
}

pub fn print_info(mode: ColorMode, message: &str) {
    ErrorOutput::new(mode).print_info(message);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
