//! Turn/outcome controller.
//!
//! `ChessGame` owns the game context and exposes the two-phase input contract
//! of a board UI: select an origin to learn its legal targets, then apply a
//! move, then resolve a promotion when one is pending. After every completed
//! turn the threat maps and check flags are recomputed and the side to move
//! is tested for checkmate or stalemate.

use tracing::{debug, info};

use crate::chess_errors::{GameError, GameResult};
use crate::game::player::Player;
use crate::game::promotion::{PromotionChoice, PromotionRequest};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{commit_move, CommittedMove};
use crate::move_generation::legal_move_checks::{checking_pieces, is_king_in_check, threat_map};
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves, legal_moves_from};
use crate::moves::move_descriptions::{CandidateMove, MoveKind};
use crate::utils::move_log::MoveLog;
use crate::utils::move_notation::move_to_notation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingMove,
    PromotionPending(PromotionRequest),
    GameOver(GameOutcome),
}

/// Result of [`ChessGame::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Captured,
    Castled,
    EnPassant,
    /// The pawn reached the last rank; call [`ChessGame::resolve_promotion`].
    AwaitingPromotion,
    /// Not in the legal set for that origin. Nothing changed.
    Rejected,
}

/// Legal targets of the piece on `origin`, tagged by how each is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub origin: Square,
    pub targets: Vec<CandidateMove>,
}

impl Selection {
    pub fn target_squares(&self) -> SquareSet {
        self.targets.iter().map(|mv| mv.to).collect()
    }

    pub fn mark_for(&self, target: Square) -> Option<MoveKind> {
        self.targets
            .iter()
            .find(|mv| mv.to == target)
            .map(|mv| mv.kind)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ChessGame {
    state: GameState,
    phase: TurnPhase,
    players: [Player; 2],
    log: MoveLog,
    /// Squares each color threatens, indexed by `Color::index`.
    threats: [SquareSet; 2],
    in_check: [bool; 2],
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::from_state(GameState::new_game())
    }

    /// Starts from an arbitrary position. The outcome is evaluated at once,
    /// so a position with no legal reply is already over.
    ///
    /// # Panics
    /// When either color does not have exactly one king.
    pub fn from_state(state: GameState) -> Self {
        for color in Color::BOTH {
            let kings = state.board.count(color, PieceKind::King);
            assert!(kings == 1, "{color} must have exactly one king, found {kings}");
        }

        let mut game = ChessGame {
            state,
            phase: TurnPhase::AwaitingMove,
            players: Color::BOTH.map(Player::new),
            log: MoveLog::new(),
            threats: [SquareSet::EMPTY; 2],
            in_check: [false; 2],
        };
        game.refresh_threats();
        game.evaluate_outcome();
        game
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    #[inline]
    pub fn move_log(&self) -> &MoveLog {
        &self.log
    }

    pub fn current_outcome(&self) -> GameOutcome {
        match self.phase {
            TurnPhase::GameOver(outcome) => outcome,
            _ => GameOutcome::InProgress,
        }
    }

    pub fn pending_promotion(&self) -> Option<PromotionRequest> {
        match self.phase {
            TurnPhase::PromotionPending(request) => Some(request),
            _ => None,
        }
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        self.in_check[color.index()]
    }

    /// Squares `color` threatens as of the last completed turn.
    #[inline]
    pub fn threatened_squares(&self, color: Color) -> SquareSet {
        self.threats[color.index()]
    }

    /// Squares of the pieces giving check to `color`.
    pub fn checking_pieces(&self, color: Color) -> Vec<Square> {
        checking_pieces(&self.state, color)
    }

    /// All legal moves of the side to move. Empty once the game is over.
    pub fn legal_moves(&mut self) -> Vec<CandidateMove> {
        if self.phase != TurnPhase::AwaitingMove {
            return Vec::new();
        }
        legal_moves(&mut self.state)
    }

    /// Legal targets of the piece on `origin`. An empty square or a piece of
    /// the side not to move yields an empty selection.
    pub fn select_origin(&mut self, origin: Square) -> GameResult<Selection> {
        self.ensure_awaiting_move()?;

        let targets = match self.state.board.occupant_at(origin) {
            Some(piece) if piece.color == self.state.side_to_move => {
                legal_moves_from(&mut self.state, origin)
            }
            _ => Vec::new(),
        };
        Ok(Selection { origin, targets })
    }

    pub fn apply_move(&mut self, origin: Square, target: Square) -> GameResult<MoveOutcome> {
        self.ensure_awaiting_move()?;

        let mover = self.state.side_to_move;
        match self.state.board.occupant_at(origin) {
            None => {
                debug!(origin = %origin, target = %target, "rejected: origin is empty");
                return Ok(MoveOutcome::Rejected);
            }
            Some(piece) if piece.color != mover => {
                debug!(
                    origin = %origin,
                    target = %target,
                    color = %mover,
                    "rejected: not the side to move"
                );
                return Ok(MoveOutcome::Rejected);
            }
            Some(_) => {}
        }

        let Some(mv) = legal_moves_from(&mut self.state, origin)
            .into_iter()
            .find(|mv| mv.to == target)
        else {
            debug!(
                origin = %origin,
                target = %target,
                color = %mover,
                "rejected: target not in legal set"
            );
            return Ok(MoveOutcome::Rejected);
        };

        if mv.promotes {
            debug!(origin = %origin, target = %target, color = %mover, "promotion pending");
            self.phase = TurnPhase::PromotionPending(PromotionRequest::new(mv, mover));
            return Ok(MoveOutcome::AwaitingPromotion);
        }

        let committed = self.complete_turn(mv, None);
        Ok(match committed.mv.kind {
            MoveKind::Castle(_) => MoveOutcome::Castled,
            MoveKind::EnPassant => MoveOutcome::EnPassant,
            MoveKind::Capture => MoveOutcome::Captured,
            MoveKind::Quiet | MoveKind::DoublePawnPush => MoveOutcome::Moved,
        })
    }

    /// Commits the pending pawn move with `choice` in place of the pawn and
    /// returns the new piece.
    pub fn resolve_promotion(&mut self, choice: PromotionChoice) -> GameResult<PlacedPiece> {
        let request = match self.phase {
            TurnPhase::PromotionPending(request) => request,
            TurnPhase::GameOver(outcome) => return Err(GameError::GameOver(outcome)),
            TurnPhase::AwaitingMove => return Err(GameError::NoPromotionPending),
        };

        self.complete_turn(request.mv, Some(choice.kind()));
        Ok(PlacedPiece {
            piece: Piece::new(request.color, choice.kind()),
            square: request.destination,
        })
    }

    /// Same as [`ChessGame::resolve_promotion`], taking the piece by name.
    /// An unknown name leaves the promotion pending.
    pub fn resolve_promotion_by_name(&mut self, name: &str) -> GameResult<PlacedPiece> {
        if let TurnPhase::GameOver(outcome) = self.phase {
            return Err(GameError::GameOver(outcome));
        }
        let choice: PromotionChoice = name.parse()?;
        self.resolve_promotion(choice)
    }

    fn ensure_awaiting_move(&self) -> GameResult<()> {
        match self.phase {
            TurnPhase::AwaitingMove => Ok(()),
            TurnPhase::PromotionPending(_) => Err(GameError::PromotionPending),
            TurnPhase::GameOver(outcome) => Err(GameError::GameOver(outcome)),
        }
    }

    fn complete_turn(&mut self, mv: CandidateMove, promotion: Option<PieceKind>) -> CommittedMove {
        let committed = commit_move(&mut self.state, mv, promotion);
        let mover = committed.moved_piece.color;
        let notation = move_to_notation(&committed);

        debug!(
            origin = %mv.from,
            target = %mv.to,
            color = %mover,
            notation = %notation,
            "move applied"
        );

        self.log.push(mover, notation.clone());
        self.players[mover.index()].record_move(notation, committed.captured);

        self.phase = TurnPhase::AwaitingMove;
        self.refresh_threats();
        self.evaluate_outcome();
        committed
    }

    fn refresh_threats(&mut self) {
        for color in Color::BOTH {
            self.threats[color.index()] = threat_map(&self.state, color);
            self.in_check[color.index()] = is_king_in_check(&self.state, color);
        }
    }

    fn evaluate_outcome(&mut self) {
        let to_move = self.state.side_to_move;
        if has_legal_move(&mut self.state, to_move) {
            return;
        }

        let outcome = if self.in_check(to_move) {
            GameOutcome::Checkmate(to_move.opposite())
        } else {
            GameOutcome::Draw
        };
        info!(outcome = %outcome, plies = self.state.ply, "game over");
        self.phase = TurnPhase::GameOver(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square parses")
    }

    #[test]
    fn selecting_pawn_lists_both_advances() {
        let mut game = ChessGame::new();
        let selection = game.select_origin(sq("e2")).expect("game in progress");
        assert_eq!(selection.targets.len(), 2);
        assert_eq!(selection.mark_for(sq("e4")), Some(MoveKind::DoublePawnPush));
        assert_eq!(selection.mark_for(sq("e3")), Some(MoveKind::Quiet));
    }

    #[test]
    fn selecting_opponent_piece_is_empty() {
        let mut game = ChessGame::new();
        let selection = game.select_origin(sq("e7")).expect("game in progress");
        assert!(selection.is_empty());
    }

    #[test]
    fn rejected_moves_leave_state_untouched() {
        let mut game = ChessGame::new();
        let before = game.state().clone();
        assert_eq!(game.apply_move(sq("e3"), sq("e4")), Ok(MoveOutcome::Rejected));
        assert_eq!(game.apply_move(sq("e7"), sq("e5")), Ok(MoveOutcome::Rejected));
        assert_eq!(game.apply_move(sq("e2"), sq("e5")), Ok(MoveOutcome::Rejected));
        assert_eq!(game.state(), &before);
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn applied_move_records_notation_and_flips_turn() {
        let mut game = ChessGame::new();
        assert_eq!(game.apply_move(sq("g1"), sq("f3")), Ok(MoveOutcome::Moved));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.player(Color::White).moves_record(), ["N_f3".to_owned()]);
        assert_eq!(game.move_log().len(), 1);
    }

    #[test]
    fn promotion_is_atomic_and_resumable() {
        let state = GameState::builder()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("a7"), Color::White, PieceKind::Pawn)
            .piece(sq("h8"), Color::Black, PieceKind::King)
            .build();
        let mut game = ChessGame::from_state(state);

        assert_eq!(game.apply_move(sq("a7"), sq("a8")), Ok(MoveOutcome::AwaitingPromotion));
        assert!(game.pending_promotion().is_some());
        assert_eq!(
            game.state().board.occupant_at(sq("a7")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(game.apply_move(sq("e1"), sq("e2")), Err(GameError::PromotionPending));

        assert_eq!(
            game.resolve_promotion_by_name("wizard"),
            Err(GameError::InvalidPromotionChoice("wizard".to_owned()))
        );
        assert!(game.pending_promotion().is_some());

        let placed = game
            .resolve_promotion(PromotionChoice::Rook)
            .expect("promotion resolves");
        assert_eq!(placed.square, sq("a8"));
        assert_eq!(placed.piece, Piece::new(Color::White, PieceKind::Rook));
        assert_eq!(game.state().board.occupant_at(sq("a8")), Some(placed.piece));
        assert!(game.state().board.is_empty(sq("a7")));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.player(Color::White).moves_record(), ["_a8=R".to_owned()]);
        assert!(game.in_check(Color::Black));
    }

    #[test]
    fn resolving_without_request_fails() {
        let mut game = ChessGame::new();
        assert_eq!(
            game.resolve_promotion(PromotionChoice::Queen),
            Err(GameError::NoPromotionPending)
        );
    }

    #[test]
    fn captured_piece_is_credited_to_capturer() {
        let mut game = ChessGame::new();
        game.apply_move(sq("e2"), sq("e4")).expect("in progress");
        game.apply_move(sq("d7"), sq("d5")).expect("in progress");
        assert_eq!(game.apply_move(sq("e4"), sq("d5")), Ok(MoveOutcome::Captured));
        assert_eq!(
            game.player(Color::White).captured(),
            [Piece::new(Color::Black, PieceKind::Pawn)]
        );
        assert!(game.player(Color::Black).captured().is_empty());
        assert!(Color::BOTH.iter().all(|&color| game.player(color).color() == color));
    }

    #[test]
    fn threatened_squares_track_each_color() {
        let game = ChessGame::new();
        assert!(game.threatened_squares(Color::White).contains(sq("e3")));
        assert!(game.threatened_squares(Color::Black).contains(sq("e6")));
        assert!(!game.threatened_squares(Color::White).contains(sq("e4")));
    }

    #[test]
    #[should_panic(expected = "must have exactly one king")]
    fn position_without_king_is_fatal() {
        let state = GameState::builder()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .build();
        let _ = ChessGame::from_state(state);
    }
}
