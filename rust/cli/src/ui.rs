//! Small helpers for consistent terminal output.

use std::io::Write;

use ringgame_engine::player::Action;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Renders a legal action set the way the input parser expects it typed.
pub fn format_options(legal: &[Action]) -> String {
    let words: Vec<&str> = legal
        .iter()
        .map(|a| match a {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Raise => "raise <amount>",
            Action::AllIn => "all-in",
            Action::Blind | Action::NotDecided => "-",
        })
        .collect();
    words.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_line_matches_parser_vocabulary() {
        let line = format_options(&[Action::Fold, Action::Call, Action::Raise, Action::AllIn]);
        assert_eq!(line, "fold, call, raise <amount>, all-in");
    }
}
