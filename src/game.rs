use crate::board::movegen::{generate_moves, has_capture, legal_moves, side_has_any_move, side_has_capture, Move, PieceMove};
use crate::board::{Board, Color, Rank, Square};
use log::{info, trace};

/// Result of relocating one piece for one leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landing {
    pub at: Square,
    pub promoted: bool,
    /// A capture leg after which the same piece can capture again.
    pub continues: bool,
}

/// Moves the piece on `from` along `mv`, removes the captured piece and
/// promotes on the far rank. The caller guarantees `mv` was generated for
/// `from` on this board.
pub fn apply_leg(board: &mut Board, from: Square, mv: &Move) -> Landing {
    let Some(mut piece) = board.take(from) else {
        return Landing { at: from, promoted: false, continues: false };
    };
    if let Some(victim) = mv.captured { board.place(victim, None); }
    let promoted = piece.rank == Rank::Man && mv.to.row == piece.color.promotion_row();
    if promoted { piece.rank = Rank::King; }
    board.place(mv.to, Some(piece));
    let continues = mv.is_capture() && has_capture(board, mv.to);
    Landing { at: mv.to, promoted, continues }
}

/// One side's full turn: the first leg plus every forced continuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub legs: Vec<PieceMove>,
    pub result: Board,
}

impl Turn {
    pub fn first(&self) -> PieceMove { self.legs[0] }
}

/// Every complete turn available to `color`, each capture chain expanded
/// along all of its branches. Order follows `generate_moves`, depth first.
pub fn complete_turns(board: &Board, color: Color) -> Vec<Turn> {
    let mut out = Vec::new();
    for pm in generate_moves(board, color) {
        let mut legs = vec![pm];
        extend_chain(*board, pm, &mut legs, &mut out);
    }
    out
}

fn extend_chain(mut board: Board, pm: PieceMove, legs: &mut Vec<PieceMove>, out: &mut Vec<Turn>) {
    let landing = apply_leg(&mut board, pm.from, &pm.mv);
    if !landing.continues {
        out.push(Turn { legs: legs.clone(), result: board });
        return;
    }
    for mv in legal_moves(&board, landing.at, true) {
        let next = PieceMove { from: landing.at, mv };
        legs.push(next);
        extend_chain(board, next, legs, out);
        legs.pop();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected { from: Square, moves: Vec<Move> },
    /// Mid-chain: only the held piece may move, and only by capturing.
    AwaitingContinuation { from: Square, moves: Vec<Move> },
    TurnComplete,
}

/// What a successful `apply_move` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub leg: PieceMove,
    pub promoted: bool,
    pub turn_passed: bool,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current: Color,
    phase: Phase,
    no_moves: Option<Color>,
    history: Vec<PieceMove>,
    turns: usize,
}

impl Default for GameState {
    fn default() -> Self { Self::new() }
}

impl GameState {
    /// Standard setup, dark to move.
    pub fn new() -> Self { Self::with_first_player(Color::Dark) }

    pub fn with_first_player(color: Color) -> Self { Self::from_board(Board::startpos(), color) }

    pub fn from_board(board: Board, to_move: Color) -> Self {
        let no_moves = if side_has_any_move(&board, to_move) { None } else { Some(to_move) };
        Self { board, current: to_move, phase: Phase::AwaitingSelection, no_moves, history: Vec::new(), turns: 0 }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn current(&self) -> Color { self.current }
    pub fn phase(&self) -> &Phase { &self.phase }
    pub fn history(&self) -> &[PieceMove] { &self.history }
    pub fn turns(&self) -> usize { self.turns }

    /// The side to move when it has no legal move at all.
    pub fn no_moves(&self) -> Option<Color> { self.no_moves }

    pub fn is_over(&self) -> bool { self.no_moves.is_some() }

    /// The piece a capture chain is pinned to, if one is in progress.
    pub fn continuation(&self) -> Option<Square> {
        match &self.phase { Phase::AwaitingContinuation { from, .. } => Some(*from), _ => None }
    }

    /// Destinations currently on offer for the selected or held piece.
    pub fn held_moves(&self) -> &[Move] {
        match &self.phase {
            Phase::PieceSelected { moves, .. } | Phase::AwaitingContinuation { moves, .. } => moves,
            _ => &[],
        }
    }

    /// Picks up the piece on `sq`. Anything other than a piece of the side
    /// to move clears the selection. Ignored while a chain is in progress.
    pub fn select(&mut self, sq: Square) -> &Phase {
        if matches!(self.phase, Phase::AwaitingContinuation { .. }) { return &self.phase; }
        self.phase = match self.board.get(sq) {
            Some(p) if p.color == self.current && !self.is_over() => {
                let must_capture = side_has_capture(&self.board, self.current);
                Phase::PieceSelected { from: sq, moves: legal_moves(&self.board, sq, must_capture) }
            }
            _ => Phase::AwaitingSelection,
        };
        &self.phase
    }

    /// Plays the held move landing on `to`, if there is one.
    pub fn play_to(&mut self, to: Square) -> Option<Applied> {
        let (from, mv) = match &self.phase {
            Phase::PieceSelected { from, moves } | Phase::AwaitingContinuation { from, moves } => {
                (*from, *moves.iter().find(|m| m.to == to)?)
            }
            _ => return None,
        };
        self.apply_move(from, &mv)
    }

    /// Pointer-style input: a square that is a held destination is played,
    /// anything else is treated as a new selection.
    pub fn click(&mut self, sq: Square) -> Option<Applied> {
        if self.held_moves().iter().any(|m| m.to == sq) { return self.play_to(sq); }
        self.select(sq);
        None
    }

    /// Executes `mv` for the piece on `from` if it is one of the moves the
    /// generator offers right now; returns `None` and changes nothing otherwise.
    ///
    /// This is the entry point for engines and replays and does not go
    /// through `select`: any current selection is discarded. A pending
    /// capture chain still pins the mover to the held piece and its captures.
    /// Pointer input goes through `click` or `play_to`, which only accept
    /// moves carried by the current `Phase`.
    pub fn apply_move(&mut self, from: Square, mv: &Move) -> Option<Applied> {
        if self.is_over() { return None; }
        let allowed = match &self.phase {
            Phase::AwaitingContinuation { from: held, moves } => *held == from && moves.contains(mv),
            _ => {
                let own = self.board.get(from).is_some_and(|p| p.color == self.current);
                own && legal_moves(&self.board, from, side_has_capture(&self.board, self.current)).contains(mv)
            }
        };
        if !allowed { return None; }

        let landing = apply_leg(&mut self.board, from, mv);
        let leg = PieceMove { from, mv: *mv };
        self.history.push(leg);
        trace!("{} plays {}{}", self.current, leg, if landing.promoted { " and crowns" } else { "" });

        if landing.continues {
            self.phase = Phase::AwaitingContinuation { from: landing.at, moves: legal_moves(&self.board, landing.at, true) };
            return Some(Applied { leg, promoted: landing.promoted, turn_passed: false });
        }
        self.phase = Phase::TurnComplete;
        self.current = self.current.opponent();
        self.turns += 1;
        if !side_has_any_move(&self.board, self.current) {
            info!("{} has no legal moves after {} turns", self.current, self.turns);
            self.no_moves = Some(self.current);
        }
        Some(Applied { leg, promoted: landing.promoted, turn_passed: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn apply_leg_promotes_on_far_rank() {
        let mut b = Board::empty();
        b.set(Square::new(6, 1), Some(Piece::man(Color::Dark))).unwrap();
        let landing = apply_leg(&mut b, Square::new(6, 1), &Move::step(Square::new(7, 2)));
        assert!(landing.promoted);
        assert_eq!(b.get(Square::new(7, 2)), Some(Piece::king(Color::Dark)));
        assert!(b.is_empty_at(Square::new(6, 1)));
    }

    #[test]
    fn king_is_never_demoted() {
        let mut b = Board::empty();
        b.set(Square::new(1, 2), Some(Piece::king(Color::Light))).unwrap();
        let landing = apply_leg(&mut b, Square::new(1, 2), &Move::step(Square::new(0, 1)));
        assert!(!landing.promoted);
        assert_eq!(b.get(Square::new(0, 1)), Some(Piece::king(Color::Light)));
    }
}
