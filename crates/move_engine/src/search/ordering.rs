//! Move ordering for alpha-beta pruning
//!
//! Tries captures of valuable pieces and promotions first. The same ordering
//! is used at the root and at every interior node.

use crate::board::Position;
use crate::constants::PROMOTION_BONUS;
use crate::types::Score;

/// Ordering key of a move; lower keys are searched first
///
/// `-(value of the piece on the destination square if capturing + 800 if promoting)`.
/// En passant captures land on an empty square and therefore score 0.
pub fn move_key<P: Position>(position: &P, mv: &P::Move) -> Score {
    let mut score = 0;

    if position.is_capture(mv) {
        if let Some(captured) = position.piece_at_destination(mv) {
            score += captured.value();
        }
    }

    if position.is_promotion(mv) {
        score += PROMOTION_BONUS;
    }

    -score
}

/// Order moves for better alpha-beta pruning
///
/// The sort is stable: moves with equal keys keep their input order.
pub fn order_moves<P: Position>(position: &P, mut moves: Vec<P::Move>) -> Vec<P::Move> {
    moves.sort_by_key(|mv| move_key(position, mv));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::testing::TreePosition;

    fn identifiers(board: &Board, moves: &[shakmaty::Move]) -> Vec<String> {
        moves.iter().map(|mv| board.move_identifier(mv)).collect()
    }

    #[test]
    fn test_order_moves_quiet_moves_keep_input_order() {
        let board = Board::starting_position();
        let moves = board.legal_moves();
        let expected = identifiers(&board, &moves);

        let ordered = order_moves(&board, moves);

        assert_eq!(identifiers(&board, &ordered), expected);
    }

    #[test]
    fn test_order_moves_stable_on_synthetic_moves() {
        let position = TreePosition::new(5, 3, |_| 0);
        let ordered = order_moves(&position, vec![4, 2, 0, 3, 1]);
        assert_eq!(ordered, vec![4, 2, 0, 3, 1]);
    }

    #[test]
    fn test_order_moves_prioritizes_valuable_captures() {
        // Pawn on e4 can take a queen on d5 or a knight on f5
        let board = Board::from_fen("4k3/8/8/3q1n2/4P3/8/8/4K3 w - - 0 1").expect("valid FEN");
        let moves = board.legal_moves();
        let count = moves.len();

        let ordered = identifiers(&board, &order_moves(&board, moves));

        assert_eq!(ordered.len(), count, "Ordering must not drop moves");
        assert_eq!(ordered[0], "e4d5", "Queen capture should be first");
        assert_eq!(ordered[1], "e4f5", "Knight capture should be second");
    }

    #[test]
    fn test_order_moves_promotions_before_quiet_moves() {
        // a7 can promote on a8 or capture the knight on b8 while promoting
        let board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        let moves = board.legal_moves();

        let capture_promotions: Vec<String> = identifiers(&board, &moves)
            .into_iter()
            .filter(|id| id.starts_with("a7b8"))
            .collect();
        let push_promotions: Vec<String> = identifiers(&board, &moves)
            .into_iter()
            .filter(|id| id.starts_with("a7a8"))
            .collect();

        let ordered = identifiers(&board, &order_moves(&board, moves));

        assert_eq!(&ordered[0..4], capture_promotions.as_slice());
        assert_eq!(&ordered[4..8], push_promotions.as_slice());
        assert!(ordered[8..].iter().all(|id| id.starts_with("e1")));
    }

    #[test]
    fn test_move_key_values() {
        let board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        for mv in board.legal_moves() {
            let id = board.move_identifier(&mv);
            let key = move_key(&board, &mv);
            if id.starts_with("a7b8") {
                assert_eq!(key, -(320 + 800), "{id}");
            } else if id.starts_with("a7a8") {
                assert_eq!(key, -800, "{id}");
            } else {
                assert_eq!(key, 0, "{id}");
            }
        }
    }
}
