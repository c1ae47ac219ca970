//! Move-acceptance policies: the standard drop and the obstacle variant.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{MoveError, PlayerId};
use crate::config::{VariantConfig, VariantKind, OBSTACLE_PROBABILITY};

/// Randomness consumed by the obstacle rule.
pub trait RandomSource {
    /// Returns `true` with the given probability.
    fn roll(&mut self, probability: f64) -> bool;

    /// A cell drawn uniformly from a `rows × cols` grid.
    fn pick_cell(&mut self, rows: usize, cols: usize) -> (usize, usize);
}

impl RandomSource for SmallRng {
    fn roll(&mut self, probability: f64) -> bool {
        self.random_bool(probability)
    }

    fn pick_cell(&mut self, rows: usize, cols: usize) -> (usize, usize) {
        (self.random_range(0..rows), self.random_range(0..cols))
    }
}

/// Per-match move policy and its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Plain gravity drop.
    Standard,
    /// Gravity drop plus a single random obstacle. Once placed, the whole
    /// column of the obstacle rejects moves.
    Obstacle { blocked: Option<(usize, usize)> },
}

impl Variant {
    pub fn new(kind: VariantKind) -> Self {
        match kind {
            VariantKind::Standard => Variant::Standard,
            VariantKind::Obstacle => Variant::Obstacle { blocked: None },
        }
    }

    pub fn for_config(config: &VariantConfig) -> Self {
        Self::new(config.kind())
    }

    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::Standard => VariantKind::Standard,
            Variant::Obstacle { .. } => VariantKind::Obstacle,
        }
    }

    /// The obstacle cell, once it exists.
    pub fn obstacle(&self) -> Option<(usize, usize)> {
        match self {
            Variant::Standard => None,
            Variant::Obstacle { blocked } => *blocked,
        }
    }

    /// Whether moves into `col` are refused by the obstacle.
    pub fn is_blocked(&self, col: usize) -> bool {
        matches!(self.obstacle(), Some((_, c)) if c == col)
    }

    /// Try to drop `player`'s piece into `col`, returning the landing row.
    ///
    /// For the obstacle variant, every in-range attempt made while no
    /// obstacle exists rolls for one first. The obstacle can land on any
    /// cell, occupied or not, including the column being played.
    pub fn attempt_move<S: RandomSource + ?Sized>(
        &mut self,
        board: &mut Board,
        col: usize,
        player: PlayerId,
        source: &mut S,
    ) -> Result<usize, MoveError> {
        if col >= board.cols() {
            return Err(MoveError::InvalidColumn);
        }
        if let Variant::Obstacle { blocked } = self {
            if blocked.is_none() && source.roll(OBSTACLE_PROBABILITY) {
                let cell = source.pick_cell(board.rows(), board.cols());
                log::info!("obstacle placed at row {}, col {}", cell.0, cell.1);
                *blocked = Some(cell);
            }
            if let Some((_, c)) = *blocked {
                if c == col {
                    return Err(MoveError::ColumnBlocked);
                }
            }
        }
        board.drop_piece(col, player)
    }
}
