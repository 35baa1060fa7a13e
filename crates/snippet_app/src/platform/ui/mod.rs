pub mod palette;
pub mod render;

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType, SetTitle};
use crossterm::{execute, queue};
use snippet_core::AppViewModel;

/// Redraws the whole screen for `view`.
pub fn paint(out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
    let palette = palette::for_theme(view.theme);
    queue!(
        out,
        SetBackgroundColor(palette.background),
        Clear(ClearType::All),
        MoveTo(0, 0)
    )?;
    for line in render::render(view) {
        queue!(
            out,
            SetForegroundColor(palette.color(line.style)),
            Print(line.text),
            Clear(ClearType::UntilNewLine),
            Print("\r\n")
        )?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}

pub fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    for (keys, action) in super::input::HELP {
        writeln!(out, "  {keys:<12} {action}")?;
    }
    out.flush()
}

/// Shows the current location in the terminal title.
pub fn set_location(out: &mut impl Write, query: Option<&str>) -> io::Result<()> {
    match query {
        Some(query) => execute!(out, SetTitle(format!("Snippet Deck ?{query}"))),
        None => execute!(out, SetTitle("Snippet Deck")),
    }
}
