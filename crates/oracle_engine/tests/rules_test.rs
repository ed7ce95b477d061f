//! Win detection over every position reachable by alternating play.

use oracle_engine::rules::classify;
use oracle_engine::{Cell, GameStatus, Player, Position, Square};
use std::collections::HashSet;

fn brute_force(position: &Position) -> GameStatus {
    let squares = position.squares();
    let mut winners = Vec::new();
    for row in 0..3 {
        winners.push([row * 3, row * 3 + 1, row * 3 + 2]);
    }
    for col in 0..3 {
        winners.push([col, col + 3, col + 6]);
    }
    winners.push([0, 4, 8]);
    winners.push([2, 4, 6]);

    for [a, b, c] in winners {
        if let Square::Occupied(player) = squares[a]
            && squares[b] == squares[a]
            && squares[c] == squares[a]
        {
            return GameStatus::Won(player);
        }
    }
    if squares.iter().all(|s| *s != Square::Empty) {
        GameStatus::Draw
    } else {
        GameStatus::Undecided
    }
}

fn collect(position: Position, to_move: Player, seen: &mut HashSet<Position>) {
    if !seen.insert(position) {
        return;
    }
    if classify(&position).is_decided() {
        return;
    }
    let cells: Vec<Cell> = position.empty_cells().collect();
    for cell in cells {
        collect(position.with_mark(cell, to_move), to_move.opponent(), seen);
    }
}

#[test]
fn test_classify_matches_brute_force_on_reachable_positions() {
    let mut seen = HashSet::new();
    collect(Position::empty(), Player::X, &mut seen);

    // Distinct positions reachable in legal play.
    assert_eq!(seen.len(), 5478);
    for position in &seen {
        assert_eq!(classify(position), brute_force(position), "{:?}", position);
    }
}

#[test]
fn test_reachable_terminal_counts() {
    let mut seen = HashSet::new();
    collect(Position::empty(), Player::X, &mut seen);

    let draws = seen
        .iter()
        .filter(|p| classify(p) == GameStatus::Draw)
        .count();
    let x_wins = seen
        .iter()
        .filter(|p| classify(p) == GameStatus::Won(Player::X))
        .count();
    let o_wins = seen
        .iter()
        .filter(|p| classify(p) == GameStatus::Won(Player::O))
        .count();

    assert_eq!(draws, 16);
    assert_eq!(x_wins, 626);
    assert_eq!(o_wins, 316);
}
