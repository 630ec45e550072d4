//! Text rendering helpers for cards, actions and hand strengths.

use ringgame_engine::cards::Card;
use ringgame_engine::hand::Category;
use ringgame_engine::player::{Action, Move};

pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
    format!("[{}]", inner.join(" "))
}

pub fn format_action(mv: Move) -> String {
    match mv.action {
        Action::NotDecided => "-".to_string(),
        Action::Blind => format!("Blind {}", mv.amount),
        Action::Fold => "Fold".to_string(),
        Action::Check => "Check".to_string(),
        Action::Call => format!("Call {}", mv.amount),
        Action::Raise => format!("Raise {}", mv.amount),
        Action::AllIn => format!("All-in {}", mv.amount),
    }
}

pub fn format_category(category: Category) -> &'static str {
    match category {
        Category::HighCard => "high card",
        Category::OnePair => "pair",
        Category::TwoPair => "two pairs",
        Category::ThreeOfAKind => "three of a kind",
        Category::Straight => "straight",
        Category::Flush => "flush",
        Category::FullHouse => "full house",
        Category::FourOfAKind => "four of a kind",
        Category::StraightFlush => "straight flush",
        Category::RoyalFlush => "royal flush",
    }
}
