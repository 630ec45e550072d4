use ringgame_engine::hand::{Category, HandStrength};
use ringgame_engine::player::Player;
use ringgame_engine::pot::{Pot, RatingGroup};

fn strength(category: Category, top: u8) -> Option<HandStrength> {
    Some(HandStrength {
        category,
        kickers: [top, 0, 0, 0, 0],
    })
}

fn group(category: Category, top: u8, seats: Vec<usize>) -> RatingGroup {
    RatingGroup {
        strength: strength(category, top),
        seats,
    }
}

#[test]
fn equal_contributions_form_one_pot() {
    let mut pot = Pot::new(vec![0, 1]);
    pot.add_chips(0, 100);
    pot.add_chips(1, 100);
    pot.recalculate_pots();
    assert_eq!(pot.side_pots().len(), 1);
    assert_eq!(pot.side_pots()[0].size, 200);
}

#[test]
fn side_pots_cover_the_whole_pot() {
    let mut pot = Pot::new(vec![0, 1, 2, 3]);
    pot.add_chips(0, 100);
    pot.add_chips(1, 150);
    pot.add_chips(2, 200);
    pot.add_chips(3, 40);
    pot.recalculate_pots();
    let covered: u32 = pot.side_pots().iter().map(|p| p.size).sum();
    assert_eq!(covered, pot.pot_size());
    assert_eq!(covered, 490);
    // pots come out ordered by descending eligibility
    let sizes: Vec<usize> = pot.side_pots().iter().map(|p| p.seats.len()).collect();
    assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn uneven_all_ins_distribute_by_tier() {
    // three all-ins: 100, 150, 200; best hand belongs to the shortest stack
    let mut pot = Pot::new(vec![0, 1, 2]);
    pot.add_chips(0, 100);
    pot.add_chips(1, 150);
    pot.add_chips(2, 200);
    pot.recalculate_pots();
    let rating = vec![
        group(Category::Flush, 14, vec![0]),
        group(Category::Straight, 9, vec![1]),
        group(Category::OnePair, 5, vec![2]),
    ];
    pot.distribute(&rating);
    // seat 0 takes the 300 main pot, seat 1 the 100 side pot,
    // seat 2 gets its uncalled 50 back
    assert_eq!(pot.payouts()[&0], 300);
    assert_eq!(pot.payouts()[&1], 100);
    assert_eq!(pot.payouts()[&2], 50);
}

#[test]
fn split_pot_shares_evenly() {
    let mut pot = Pot::new(vec![0, 1]);
    pot.add_chips(0, 100);
    pot.add_chips(1, 100);
    pot.recalculate_pots();
    let rating = vec![group(Category::TwoPair, 9, vec![0, 1])];
    pot.distribute(&rating);
    assert_eq!(pot.payouts()[&0], 100);
    assert_eq!(pot.payouts()[&1], 100);
}

#[test]
fn odd_chips_go_to_the_earliest_winners() {
    let mut pot = Pot::new(vec![0, 1, 2]);
    pot.add_chips(0, 34);
    pot.add_chips(1, 34);
    pot.add_chips(2, 33);
    pot.recalculate_pots();
    // 33-tier pot of 99 plus a 1-tier pot of 2 both split between 0 and 1;
    // no split is ever off by more than one chip
    let rating = vec![group(Category::OnePair, 8, vec![0, 1, 2])];
    pot.distribute(&rating);
    let total: u32 = pot.payouts().values().sum();
    assert_eq!(total, 101);
    assert!(pot.payouts()[&0] >= pot.payouts()[&1]);
    assert!(pot.payouts()[&0] - pot.payouts()[&2] <= 2);
}

#[test]
fn folded_seat_money_stays_in_the_pot() {
    let mut pot = Pot::new(vec![0, 1, 2]);
    pot.add_chips(0, 50);
    pot.add_chips(1, 50);
    pot.add_chips(2, 20);
    pot.remove_seat(2);
    pot.recalculate_pots();
    let covered: u32 = pot.side_pots().iter().map(|p| p.size).sum();
    assert_eq!(covered, 120);
    let rating = vec![group(Category::OnePair, 11, vec![0]), group(Category::HighCard, 14, vec![1])];
    pot.distribute(&rating);
    assert_eq!(pot.payouts()[&0], 120);
}

#[test]
fn walkover_rating_takes_every_pot() {
    let mut pot = Pot::new(vec![0, 1]);
    pot.add_chips(0, 10);
    pot.add_chips(1, 5);
    pot.remove_seat(1);
    pot.recalculate_pots();
    let rating = vec![RatingGroup {
        strength: None,
        seats: vec![0],
    }];
    pot.distribute(&rating);
    assert_eq!(pot.payouts()[&0], 15);
}

#[test]
fn paying_twice_credits_once() {
    let mut players = vec![Player::new("a", 0, true), Player::new("b", 0, true)];
    let mut pot = Pot::new(vec![0, 1]);
    pot.add_chips(0, 60);
    pot.add_chips(1, 60);
    pot.recalculate_pots();
    pot.distribute(&[group(Category::Straight, 10, vec![1])]);
    pot.pay_wins(&mut players);
    assert_eq!(players[1].stack(), 120);
    pot.pay_wins(&mut players);
    assert_eq!(players[1].stack(), 120);
    assert_eq!(players[0].stack(), 0);
}
