//! Headless commands: `suggest` and `analyze`.

use crate::config::OracleConfig;
use anyhow::{Context, Result, bail};
use oracle_engine::{
    EngineState, Evaluation, GameTree, Outcome, Player, TreeStats, TurnEngine, minimax,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::time::Instant;
use tracing::{info, instrument};

/// Replays `moves` and renders the board with the predicted player's hint.
///
/// Moves alternate starting with X. Any illegal move aborts the replay.
#[instrument(skip(config), fields(predicted = %config.predicted_player()))]
pub fn suggest(config: &OracleConfig, moves: &[(usize, usize)]) -> Result<String> {
    let tree = GameTree::full();
    let mut engine = TurnEngine::new(&tree, config.engine_config());

    for (index, &(row, col)) in moves.iter().enumerate() {
        if engine.state() == EngineState::GameOver {
            bail!("Move {} ({},{}) played after the game ended", index + 1, row, col);
        }
        engine
            .apply_move(row, col)
            .with_context(|| format!("Move {} ({},{}) rejected", index + 1, row, col))?;
    }

    let mut out = String::new();
    writeln!(out, "{}", engine.board().display())?;
    writeln!(out)?;

    if let Some(outcome) = engine.outcome() {
        writeln!(out, "{}", describe_outcome(outcome))?;
        return Ok(out);
    }

    let active = engine.active_player();
    writeln!(out, "To move: {}", active)?;
    match engine.suggest() {
        Some(cell) => {
            let value = *engine.recommend().value();
            info!(%cell, value, "Suggestion computed");
            writeln!(out, "Suggested: {} {}", cell.label(), cell)?;
            writeln!(out, "Value: {}", describe_value(value))?;
        }
        None => writeln!(
            out,
            "No suggestion: hints are for {}",
            engine.config().predicted_player()
        )?,
    }
    Ok(out)
}

/// Summary of the exhaustive tree.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Node and leaf counts.
    pub stats: TreeStats,
    /// Perfect-play value of the empty board.
    pub root: Evaluation,
    /// Milliseconds spent building the tree.
    pub build_ms: u128,
}

/// Builds the full tree and evaluates the opening position.
#[instrument]
pub fn analyze() -> Analysis {
    let started = Instant::now();
    let tree = GameTree::full();
    let build_ms = started.elapsed().as_millis();

    let stats = tree.stats();
    let root = minimax::evaluate(tree.root(), Player::X, stats.max_depth);
    info!(nodes = stats.nodes, build_ms, "Analysis complete");

    Analysis {
        stats,
        root,
        build_ms,
    }
}

/// Renders an [`Analysis`] as text or JSON.
pub fn render_analysis(analysis: &Analysis, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(analysis).context("Failed to serialize analysis");
    }

    let stats = &analysis.stats;
    let mut out = String::new();
    writeln!(out, "Nodes:      {}", stats.nodes)?;
    writeln!(out, "Leaves:     {}", stats.leaves())?;
    writeln!(out, "  X wins:   {}", stats.x_wins)?;
    writeln!(out, "  O wins:   {}", stats.o_wins)?;
    writeln!(out, "  Draws:    {}", stats.draws)?;
    writeln!(out, "Max depth:  {}", stats.max_depth)?;
    writeln!(out, "Root value: {}", describe_value(*analysis.root.value()))?;
    if let Some(cell) = analysis.root.recommended_cell() {
        writeln!(out, "Opening:    {} {}", cell.label(), cell)?;
    }
    writeln!(out, "Built in:   {} ms", analysis.build_ms)?;
    Ok(out)
}

fn describe_value(value: i8) -> &'static str {
    match value {
        v if v > 0 => "X wins with best play",
        v if v < 0 => "O wins with best play",
        _ => "draw with best play",
    }
}

fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(player) => format!("Game over: {} wins", player),
        Outcome::Draw => "Game over: draw".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_engine::SearchDepth;

    fn predicting(player: Player) -> OracleConfig {
        OracleConfig::default().with_overrides(Some(player), Some(SearchDepth::Full))
    }

    #[test]
    fn test_suggest_blocks_column() {
        let out = suggest(&predicting(Player::O), &[(0, 0), (1, 1), (1, 0)]).unwrap();
        assert!(out.contains("To move: O"));
        assert!(out.contains("Suggested: Bottom-left (2, 0)"), "{}", out);
    }

    #[test]
    fn test_suggest_for_other_player_gives_none() {
        let out = suggest(&predicting(Player::O), &[(0, 0), (1, 1)]).unwrap();
        assert!(out.contains("To move: X"));
        assert!(out.contains("No suggestion: hints are for O"));
    }

    #[test]
    fn test_suggest_reports_finished_game() {
        let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
        let out = suggest(&predicting(Player::O), &moves).unwrap();
        assert!(out.contains("Game over: X wins"));
    }

    #[test]
    fn test_suggest_rejects_bad_moves() {
        assert!(suggest(&predicting(Player::O), &[(0, 0), (0, 0)]).is_err());
        assert!(suggest(&predicting(Player::O), &[(4, 0)]).is_err());

        let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (2, 2)];
        assert!(suggest(&predicting(Player::O), &moves).is_err());
    }
}
