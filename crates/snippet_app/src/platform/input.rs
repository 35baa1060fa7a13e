use snippet_core::Msg;

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forwarded to the session as-is.
    Session(Msg),
    Help,
    Quit,
    /// Blank line: redraw.
    Redraw,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Redraw;
    }
    // Card numbers on screen are 1-based.
    if let Ok(number) = line.parse::<usize>() {
        return match number.checked_sub(1) {
            Some(index) => Command::Session(Msg::CardChanged { index }),
            None => Command::Unknown(line.to_string()),
        };
    }

    let msg = match line.to_ascii_lowercase().as_str() {
        "n" | "next" => Msg::NextCard,
        "p" | "prev" | "previous" => Msg::PreviousCard,
        "r" | "restart" => Msg::RestartClicked,
        "h" | "home" | "back" => Msg::BackHomeClicked,
        "c" | "copy" => Msg::CopyCodeClicked,
        "s" | "share" => Msg::ShareClicked,
        "i" | "image" => Msg::CopyImageClicked,
        "t" | "theme" => Msg::ThemeToggled,
        "retry" => Msg::RetryClicked,
        "x" | "dismiss" => Msg::NoticeDismissed,
        "?" | "help" => return Command::Help,
        "q" | "quit" | "exit" => return Command::Quit,
        _ => return Command::Unknown(line.to_string()),
    };
    Command::Session(msg)
}

pub const HELP: &[(&str, &str)] = &[
    ("n, next", "next card (past the last card loads the next page)"),
    ("p, prev", "previous card"),
    ("<number>", "jump to card"),
    ("r, restart", "reshuffle and start over"),
    ("h, home", "leave a shared card and browse the deck"),
    ("c, copy", "copy the code"),
    ("s, share", "copy a link to this card"),
    ("i, image", "copy a snapshot of this card"),
    ("t, theme", "switch light/dark"),
    ("retry", "load the feed again after a failure"),
    ("x, dismiss", "hide the notice"),
    ("q, quit", "exit"),
];
