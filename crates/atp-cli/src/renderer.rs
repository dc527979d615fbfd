//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for inline markdown styling, with a plain-text fallback
//! for `--no-color` and for piping output into other tools.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.render_with_header_color(markdown, BLUE);
        Ok(())
    }

    /// Render a validation failure; headers are shown in red
    pub fn render_failure(&self, markdown: &str) -> Result<()> {
        self.render_with_header_color(markdown, RED);
        Ok(())
    }

    fn render_with_header_color(&self, markdown: &str, color: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }

        // Header lines keep their hash marks; termimad would strip them.
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("{color}{line}{RESET}");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
