//! Parsing of typed player input into engine moves.

use ringgame_engine::player::{Action, Move};

/// Parses a typed decision like `check`, `call`, `raise 120` or `all-in`
/// into a [`Move`]. Errors are human-readable prompts, not conditions.
pub fn parse_move(input: &str) -> Result<Move, String> {
    let mut tokens = input.split_whitespace();
    let Some(word) = tokens.next() else {
        return Err("You must input an action, and an amount for a raise".to_string());
    };

    let action = match word.to_ascii_lowercase().as_str() {
        "fold" => Action::Fold,
        "check" => Action::Check,
        "call" => Action::Call,
        "raise" => Action::Raise,
        "all-in" | "allin" | "all_in" => Action::AllIn,
        _ => return Err("There's no such action".to_string()),
    };

    let amount = match tokens.next() {
        Some(raw) => {
            let value: i64 = raw
                .parse()
                .map_err(|_| "Invalid bet amount. It must be a whole number".to_string())?;
            if value < 0 {
                return Err("You must enter positive bet".to_string());
            }
            u32::try_from(value).map_err(|_| "That bet is too large".to_string())?
        }
        None => {
            if action == Action::Raise {
                return Err("A raise needs an amount, like: raise 50".to_string());
            }
            0
        }
    };

    if tokens.next().is_some() {
        return Err("You must input an action, and an amount for a raise".to_string());
    }

    Ok(Move::new(action, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_actions() {
        assert_eq!(parse_move("fold"), Ok(Move::of(Action::Fold)));
        assert_eq!(parse_move("Check"), Ok(Move::of(Action::Check)));
        assert_eq!(parse_move("CALL"), Ok(Move::of(Action::Call)));
        assert_eq!(parse_move("all-in"), Ok(Move::of(Action::AllIn)));
        assert_eq!(parse_move("allin"), Ok(Move::of(Action::AllIn)));
    }

    #[test]
    fn parses_raise_with_amount() {
        assert_eq!(parse_move("raise 120"), Ok(Move::new(Action::Raise, 120)));
        assert_eq!(parse_move("  raise   5 "), Ok(Move::new(Action::Raise, 5)));
    }

    #[test]
    fn rejects_negative_bets() {
        let err = parse_move("raise -5").unwrap_err();
        assert!(err.contains("positive"));
    }

    #[test]
    fn rejects_missing_raise_amount() {
        assert!(parse_move("raise").is_err());
    }

    #[test]
    fn rejects_unknown_actions() {
        assert!(parse_move("shove").is_err());
        assert!(parse_move("").is_err());
    }

    #[test]
    fn rejects_garbage_amounts() {
        assert!(parse_move("raise ten").is_err());
        assert!(parse_move("raise 10 20").is_err());
    }
}
