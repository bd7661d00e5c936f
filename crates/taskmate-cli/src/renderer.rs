//! Terminal rendering for markdown output.
//!
//! Renders the core's markdown through a termimad skin, with headers and
//! category badges colorized line by line, and falls back to plain text
//! when colors are disabled.

use anyhow::Result;
use taskmate_core::display::{category_color, CategoryColor};
use termimad::{crossterm::style::Color, MadSkin};

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
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    // Keep hash symbols visible on header lines
                    println!("\x1b[34m{line}\x1b[0m");
                } else if let Some(category) = line.strip_prefix("- Category: ") {
                    let code = ansi_code(category_color(category));
                    println!("- Category: \x1b[{code}m{category}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{}", markdown);
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI foreground code for a palette entry.
fn ansi_code(color: CategoryColor) -> u8 {
    match color {
        CategoryColor::Blue => 34,
        CategoryColor::Green => 32,
        CategoryColor::Violet => 35,
        CategoryColor::Slate => 90,
    }
}
