//! A match: board, rules and move policy behind one turn-based API.

use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::{Board, Render},
    common::{BoardError, Move, MoveError, PlayerId},
    config::{VariantConfig, VariantKind, PLAYER_ONE, PLAYER_TWO},
    rules::RuleSet,
    variant::{RandomSource, Variant},
};

/// Outcome of a match so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchResult {
    InProgress,
    Win(PlayerId),
    Draw,
}

impl MatchResult {
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchResult::InProgress)
    }
}

/// Serializable record of a match, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub config: VariantConfig,
    pub result: MatchResult,
    pub moves: Vec<Move>,
    pub obstacle: Option<(usize, usize)>,
}

/// A single match: board, rules, variant policy and turn order.
///
/// Turns alternate strictly between player 1 and player 2. Extra players
/// registered by a controller never get a turn.
pub struct Match<S = SmallRng> {
    config: VariantConfig,
    board: Board,
    rules: RuleSet,
    variant: Variant,
    current: PlayerId,
    result: MatchResult,
    source: S,
}

impl Match<SmallRng> {
    /// Match whose obstacle placement is reproducible from `seed`.
    pub fn with_seed(config: VariantConfig, seed: u64) -> Result<Self, BoardError> {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }
}

impl<S: RandomSource> Match<S> {
    /// Start a match with an empty board. Player 1 moves first.
    pub fn new(config: VariantConfig, source: S) -> Result<Self, BoardError> {
        let board = Board::new(config.rows(), config.cols())?;
        Ok(Self {
            config,
            board,
            rules: RuleSet::new(config.win_length())?,
            variant: Variant::for_config(&config),
            current: PLAYER_ONE,
            result: MatchResult::InProgress,
            source,
        })
    }

    /// Validate the parameters and start a match.
    pub fn create(
        kind: VariantKind,
        rows: usize,
        cols: usize,
        win_length: usize,
        source: S,
    ) -> Result<Self, BoardError> {
        Self::new(VariantConfig::new(kind, rows, cols, win_length)?, source)
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn result(&self) -> MatchResult {
        self.result
    }

    pub fn is_terminal(&self) -> bool {
        self.result.is_terminal()
    }

    /// Obstacle cell, if the variant has placed one.
    pub fn obstacle(&self) -> Option<(usize, usize)> {
        self.variant.obstacle()
    }

    /// Play `col` for the player whose turn it is. Returns the landing row.
    pub fn attempt_move(&mut self, col: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let player = self.current;
        let row = self
            .variant
            .attempt_move(&mut self.board, col, player, &mut self.source)?;
        log::debug!("player {} dropped into column {} (row {})", player, col, row);

        if let Some(winner) = self.rules.check_win(&self.board) {
            log::info!("player {} wins after {} moves", winner, self.board.move_count());
            self.result = MatchResult::Win(winner);
        } else if self.rules.check_draw(&self.board) {
            log::info!("board full, match drawn");
            self.result = MatchResult::Draw;
        } else {
            self.current = if self.current == PLAYER_ONE {
                PLAYER_TWO
            } else {
                PLAYER_ONE
            };
        }
        Ok(row)
    }

    /// Like [`Match::attempt_move`], but rejects a mover other than the
    /// current player.
    pub fn attempt_move_as(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if player != self.current {
            return Err(MoveError::NotYourTurn);
        }
        self.attempt_move(col)
    }

    /// Columns that would currently accept a piece.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.board.cols())
            .filter(|&c| !self.board.is_column_full(c) && !self.variant.is_blocked(c))
            .collect()
    }

    /// In progress, but no column can take a piece: the only columns with
    /// room left are blocked by the obstacle.
    pub fn is_stalled(&self) -> bool {
        !self.is_terminal() && self.open_columns().is_empty()
    }

    /// Display lines with the obstacle overlaid.
    pub fn render(&self) -> Render<'_> {
        self.board.render(self.obstacle())
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            config: self.config,
            result: self.result,
            moves: self.board.moves().to_vec(),
            obstacle: self.obstacle(),
        }
    }
}
