//! Determinism of replays and cursor safety under arbitrary input.

use oracle_engine::{EngineConfig, EngineState, GameTree, Player, SearchDepth, Tick, TurnEngine};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_replay_reproduces_final_board() {
    let tree = GameTree::full();
    let config = EngineConfig::new(Player::O, SearchDepth::Full);
    let mut engine = TurnEngine::new(&tree, config);
    for (row, col) in [(1, 1), (0, 0), (0, 2), (2, 0), (1, 0), (1, 2)] {
        engine.enqueue(row, col);
    }
    while engine.queued() > 0 {
        engine.tick().unwrap();
    }

    let replayed = TurnEngine::replay(&tree, config, engine.accepted_moves()).unwrap();
    assert_eq!(replayed.board(), engine.board());
    assert_eq!(replayed.snapshots(), engine.snapshots());
    assert_eq!(replayed.state(), engine.state());
}

#[test]
fn test_random_inputs_never_desync() {
    let tree = GameTree::full();
    let config = EngineConfig::new(Player::X, SearchDepth::Plies(3));
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..200 {
        let mut engine = TurnEngine::new(&tree, config);
        while engine.state() == EngineState::AwaitingMove {
            // Row and column up to 3 so some inputs fall off the board.
            engine.enqueue(rng.random_range(0..4), rng.random_range(0..4));
            match engine.tick() {
                Ok(Tick::Applied(_)) | Ok(Tick::Rejected(_)) => {}
                Ok(Tick::Idle) => panic!("queued input was not consumed"),
                Err(err) => panic!("fatal error: {}", err),
            }
            assert_eq!(*engine.node().position(), engine.board().position());
        }

        let replayed = TurnEngine::replay(&tree, config, engine.accepted_moves()).unwrap();
        assert_eq!(replayed.board(), engine.board());
    }
}

#[test]
fn test_replay_after_game_over_fails() {
    let tree = GameTree::full();
    let config = EngineConfig::default();
    let mut engine = TurnEngine::new(&tree, config);
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.apply_move(row, col).unwrap();
    }
    let mut moves = engine.accepted_moves().to_vec();
    moves.push(oracle_engine::Move::new(
        Player::O,
        oracle_engine::Cell::BottomRight,
    ));

    assert_eq!(
        TurnEngine::replay(&tree, config, &moves).unwrap_err(),
        oracle_engine::MoveError::GameOver
    );
}
