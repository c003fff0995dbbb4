use crate::{board::Board, board::Promotion, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
///
/// Promotions count once per destination square, so counts differ from
/// published tables once pawns can promote.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    fn inner(board: &mut Board, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(board, buf);
        if rest.is_empty() {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            board.make_move(mv, Promotion::AutoQueen);
            nodes += inner(board, rest);
            board.unmake_move();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, &mut layers[..])
}
