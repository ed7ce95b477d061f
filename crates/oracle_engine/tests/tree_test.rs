//! Structure and value of the exhaustive game tree.

use oracle_engine::minimax::{DRAWN, evaluate};
use oracle_engine::{GameStatus, GameTree, Player, TreeNode};

fn check_leaves(node: &TreeNode) {
    if node.is_leaf() {
        assert_ne!(*node.status(), GameStatus::Undecided, "{:?}", node.position());
        return;
    }
    assert_eq!(*node.status(), GameStatus::Undecided);
    assert_eq!(node.children().len(), node.position().empty_count());
    for child in node.children() {
        assert_eq!(*child.to_move(), node.to_move().opponent());
        check_leaves(child);
    }
}

#[test]
fn test_full_tree_has_only_decided_leaves() {
    let tree = GameTree::full();
    check_leaves(tree.root());
}

#[test]
fn test_empty_board_is_forced_draw() {
    let tree = GameTree::full();
    let eval = evaluate(tree.root(), Player::X, 9);
    assert_eq!(*eval.value(), DRAWN);
}

#[test]
fn test_every_opening_draws() {
    let tree = GameTree::full();
    for child in tree.root().children() {
        let eval = evaluate(child, Player::O, 8);
        assert_eq!(*eval.value(), DRAWN, "{:?}", child.last_move());
    }
}
