use crate::board::movegen::PieceMove;
use crate::board::{Board, Color};
use crate::game::complete_turns;
use crate::search::eval::{evaluate, LOSS_SCORE, WIN_SCORE};

pub const DEFAULT_DEPTH: u32 = 5;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub depth: u32,
    pub use_pruning: bool,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: DEFAULT_DEPTH, use_pruning: true } }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub best: Option<PieceMove>,
    /// The complete turn (first leg plus forced continuations) that was scored.
    pub line: Vec<PieceMove>,
    pub score: f64,
    pub nodes: u64,
}

pub struct Searcher {
    pub(crate) nodes: u64,
    use_pruning: bool,
}

impl Default for Searcher {
    fn default() -> Self { Self { nodes: 0, use_pruning: true } }
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn search_with_params(&mut self, board: &Board, color: Color, params: SearchParams) -> SearchResult {
        self.use_pruning = params.use_pruning;
        self.search_depth(board, color, params.depth)
    }

    /// Best first leg for `color`. The root maximises for dark and minimises
    /// for light; ties keep the earliest turn in enumeration order.
    pub fn search_depth(&mut self, board: &Board, color: Color, depth: u32) -> SearchResult {
        self.nodes = 0;
        let maximizing = color == Color::Dark;
        let turns = complete_turns(board, color);
        if turns.is_empty() {
            let score = if maximizing { LOSS_SCORE } else { WIN_SCORE };
            return SearchResult { best: None, line: Vec::new(), score, nodes: self.nodes };
        }

        let mut alpha = LOSS_SCORE;
        let mut beta = WIN_SCORE;
        let mut best: Option<(usize, f64)> = None;
        for (i, turn) in turns.iter().enumerate() {
            let score = self.minimax(&turn.result, depth.saturating_sub(1), alpha, beta, !maximizing);
            let better = match best {
                None => true,
                Some((_, bs)) => if maximizing { score > bs } else { score < bs },
            };
            if better { best = Some((i, score)); }
            if self.use_pruning {
                if maximizing { alpha = alpha.max(score); } else { beta = beta.min(score); }
            }
        }
        let (idx, score) = best.unwrap_or((0, evaluate(board)));
        let line = turns[idx].legs.clone();
        log::debug!("search depth {depth} for {color}: best {} score {score} nodes {}", line[0], self.nodes);
        SearchResult { best: Some(line[0]), line, score, nodes: self.nodes }
    }

    /// Depth-limited minimax over complete turns. Dark moves at maximising
    /// nodes, light at minimising ones. A side with no move scores as an
    /// immediate loss for that side whatever depth remains.
    pub fn minimax(&mut self, board: &Board, depth: u32, mut alpha: f64, mut beta: f64, maximizing: bool) -> f64 {
        self.nodes += 1;
        if depth == 0 { return evaluate(board); }
        let side = if maximizing { Color::Dark } else { Color::Light };
        let turns = complete_turns(board, side);
        if turns.is_empty() { return if maximizing { LOSS_SCORE } else { WIN_SCORE }; }

        if maximizing {
            let mut value = LOSS_SCORE;
            for turn in &turns {
                value = value.max(self.minimax(&turn.result, depth - 1, alpha, beta, false));
                alpha = alpha.max(value);
                if self.use_pruning && beta <= alpha { break; }
            }
            value
        } else {
            let mut value = WIN_SCORE;
            for turn in &turns {
                value = value.min(self.minimax(&turn.result, depth - 1, alpha, beta, true));
                beta = beta.min(value);
                if self.use_pruning && beta <= alpha { break; }
            }
            value
        }
    }
}

pub fn best_move(board: &Board, color: Color, depth: u32) -> Option<PieceMove> {
    Searcher::new().search_depth(board, color, depth).best
}
