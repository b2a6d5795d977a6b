//! Fixed-depth minimax with alpha-beta pruning.

use tracing::{debug, trace};

use crate::eval::{Evaluator, Material};
use crate::rules::{RulesEngine, Side};
use crate::score::Score;

/// Best root move together with what it cost to find it.
#[derive(Debug, Clone)]
pub(crate) struct RootChoice<M> {
    pub best_move: M,
    pub score: Score,
    pub nodes: u64,
}

/// Picks the move with the best material outcome `depth` plies ahead.
///
/// Returns `None` when the side to move has no legal moves. Depth 0 scores
/// each move by the position it leads to, the same as depth 1. The rules
/// engine is left exactly as it was found.
pub fn select_best_move<R: RulesEngine>(depth: u32, rules: &mut R) -> Option<R::Move> {
    select_best_move_with(depth, rules, &Material)
}

/// [`select_best_move`] with a caller-supplied leaf evaluator.
pub fn select_best_move_with<R, E>(depth: u32, rules: &mut R, evaluator: &E) -> Option<R::Move>
where
    R: RulesEngine,
    E: Evaluator<R>,
{
    search_root(depth, rules, evaluator).map(|choice| choice.best_move)
}

pub(crate) fn search_root<R, E>(
    depth: u32,
    rules: &mut R,
    evaluator: &E,
) -> Option<RootChoice<R::Move>>
where
    R: RulesEngine,
    E: Evaluator<R>,
{
    let moves = rules.legal_moves();
    if moves.is_empty() {
        debug!(depth, "no legal moves at root");
        return None;
    }

    let perspective = rules.side_to_move();
    debug!(depth, moves = moves.len(), side = ?perspective, "root search started");

    let mut searcher = Searcher {
        rules,
        evaluator,
        perspective,
        nodes: 0,
    };
    let child_depth = depth.saturating_sub(1);

    let mut best: Option<(R::Move, Score)> = None;
    for (index, mv) in moves.into_iter().enumerate() {
        let score = searcher.child(&mv, child_depth, Score::NEG_INFINITY, Score::INFINITY, false);
        trace!(index, ?mv, %score, "root move scored");

        // Strictly better only: the earliest move keeps a tie.
        let improves = match &best {
            None => true,
            Some((_, best_score)) => score > *best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    let nodes = searcher.nodes;
    let choice = best.map(|(best_move, score)| RootChoice {
        best_move,
        score,
        nodes,
    });
    if let Some(choice) = &choice {
        debug!(
            best_move = ?choice.best_move,
            score = %choice.score,
            nodes = choice.nodes,
            "root search finished"
        );
    }
    choice
}

struct Searcher<'a, R, E> {
    rules: &'a mut R,
    evaluator: &'a E,
    /// Side choosing at the root; leaf scores are oriented towards it.
    perspective: Side,
    nodes: u64,
}

impl<R, E> Searcher<'_, R, E>
where
    R: RulesEngine,
    E: Evaluator<R>,
{
    fn leaf(&self) -> Score {
        let white_view = self.evaluator.evaluate(&*self.rules);
        match self.perspective {
            Side::White => white_view,
            Side::Black => -white_view,
        }
    }

    fn child(
        &mut self,
        mv: &R::Move,
        depth: u32,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Score {
        self.rules.apply_move(mv);
        self.nodes += 1;
        let score = self.minimax(depth, alpha, beta, maximizing);
        self.rules.undo_move();
        score
    }

    /// Terminal positions are scored by material like any other leaf, so a
    /// mate is worth no more than the pieces left on the board.
    fn minimax(&mut self, depth: u32, mut alpha: Score, mut beta: Score, maximizing: bool) -> Score {
        if depth == 0 || self.rules.is_terminal() {
            return self.leaf();
        }

        let moves = self.rules.legal_moves();
        if moves.is_empty() {
            return self.leaf();
        }

        if maximizing {
            let mut best = Score::NEG_INFINITY;
            for mv in &moves {
                let score = self.child(mv, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = Score::INFINITY;
            for mv in &moves {
                let score = self.child(mv, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
