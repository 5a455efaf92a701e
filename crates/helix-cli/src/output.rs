//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let plain = match args.output_format {
            OutputFormat::Plain => true,
            OutputFormat::Human => false,
            OutputFormat::Auto => !io::stdout().is_terminal(),
        };

        Self {
            quiet: args.quiet,
            no_color: plain || args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-consumable value (a path, a TOML dump, a template body).
    /// Printed even in quiet mode so `$(helix templates path)` works.
    pub fn data(&self, value: &str) -> io::Result<()> {
        self.term.write_line(value)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2713}', msg, |s| s.green().bold().to_string(), |s| s.green().to_string())
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status('\u{26a0}', msg, |s| s.yellow().bold().to_string(), |s| s.yellow().to_string())
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2139}', msg, |s| s.blue().bold().to_string(), |s| s.blue().to_string())
    }

    /// Bold cyan section title.
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.styled(text, |s| s.cyan().bold().to_string())
    }

    /// One list entry; `marked` entries get a `*` and a note.
    pub fn list_item(&self, item: &str, marked: bool, note: &str) -> io::Result<()> {
        if !marked {
            return self.print(&format!("  {item}"));
        }
        if self.no_color {
            self.print(&format!("* {item} ({note})"))
        } else {
            self.print(&format!("{} {item} {}", "*".yellow().bold(), note.dimmed()))
        }
    }

    /// Source snippet, dimmed line by line.
    pub fn code(&self, block: &str) -> io::Result<()> {
        block
            .lines()
            .try_for_each(|line| self.styled(line, |s| s.dimmed().to_string()))
    }

    /// `<symbol> <msg>` with separate paint for the symbol and the text.
    fn status(
        &self,
        symbol: char,
        msg: &str,
        paint_symbol: fn(&str) -> String,
        paint_msg: fn(&str) -> String,
    ) -> io::Result<()> {
        if self.no_color {
            return self.print(&format!("{symbol} {msg}"));
        }
        let symbol = symbol.to_string();
        self.print(&format!("{} {}", paint_symbol(&symbol), paint_msg(msg)))
    }

    fn styled(&self, text: &str, paint: fn(&str) -> String) -> io::Result<()> {
        if self.no_color {
            self.print(text)
        } else {
            self.print(&paint(text))
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
