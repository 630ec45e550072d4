use std::io::{BufRead, Cursor};

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(Vec::new());
    let code = ringgame_cli::run(
        args.to_vec(),
        &mut out,
        &mut err,
        &mut stdin as &mut dyn BufRead,
    );
    (
        code,
        String::from_utf8_lossy(&out).to_string(),
        String::from_utf8_lossy(&err).to_string(),
    )
}

#[test]
fn deals_a_full_board_to_every_seat() {
    let (code, out, _) = run_cli(&["ringgame", "deal", "--seed", "42", "--players", "4"]);
    assert_eq!(code, 0);
    assert!(out.contains("deal: players=4 seed=42"));
    assert!(out.contains("Board: ["));
    for seat in 1..=4 {
        assert!(out.contains(&format!("Seat {}:", seat)));
    }
    // 52 - 8 hole cards - 3 burns - 5 board cards
    assert!(out.contains("Cards left in the deck: 36"));
}

#[test]
fn equal_seeds_deal_equal_hands() {
    let (_, first, _) = run_cli(&["ringgame", "deal", "--seed", "9", "--players", "3"]);
    let (_, second, _) = run_cli(&["ringgame", "deal", "--seed", "9", "--players", "3"]);
    assert_eq!(first, second);
}

#[test]
fn refuses_out_of_range_tables() {
    let (code, _, err) = run_cli(&["ringgame", "deal", "--players", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("players must be between 2 and 10"));

    let (code, _, _) = run_cli(&["ringgame", "deal", "--players", "11"]);
    assert_eq!(code, 2);
}
