use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::MoveKind;

/// Leaf statistics of a perft walk. Every counter except `nodes` describes
/// the move that reached the leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn record_leaf(&mut self, mv: &GeneratedMove) {
        self.nodes += 1;
        if mv.mv.kind.is_capture() {
            self.captures += 1;
        }
        if mv.mv.kind == MoveKind::EnPassant {
            self.en_passant += 1;
        }
        if matches!(mv.mv.kind, MoveKind::Castle(_)) {
            self.castles += 1;
        }
        if mv.promotion.is_some() {
            self.promotions += 1;
        }
        if mv.annotations.gives_check {
            self.checks += 1;
        }
        if mv.annotations.is_checkmate {
            self.checkmates += 1;
        }
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state)? {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<Vec<(GeneratedMove, usize)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut out = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        let mut local = PerftCounts::default();
        perft_recurse(generator, &mv, depth, 1, &mut local)?;
        out.push((mv, local.nodes));
    }
    Ok(out)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        counts.record_leaf(mv);
        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.game_after_move)? {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }
    Ok(())
}
