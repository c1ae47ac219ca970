use crate::common::{BoardError, PlayerId};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// Chance that a move attempt places the obstacle, while none exists yet.
pub const OBSTACLE_PROBABILITY: f64 = 0.2;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 3;

pub const PLAYER_ONE: PlayerId = match PlayerId::new(1) {
    Some(p) => p,
    None => unreachable!(),
};
pub const PLAYER_TWO: PlayerId = match PlayerId::new(2) {
    Some(p) => p,
    None => unreachable!(),
};

/// Which move-acceptance policy a match uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VariantKind {
    Standard,
    Obstacle,
}

/// Immutable rule parameters of a match.
///
/// `win_length <= min(rows, cols)` is not required. An oversized win-length
/// just never matches in the directions it does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawVariantConfig"))]
pub struct VariantConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
    obstacle: bool,
}

impl VariantConfig {
    /// Validate and build a configuration.
    pub fn new(
        kind: VariantKind,
        rows: usize,
        cols: usize,
        win_length: usize,
    ) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions);
        }
        if win_length == 0 {
            return Err(BoardError::InvalidWinLength);
        }
        Ok(Self {
            rows,
            cols,
            win_length,
            obstacle: kind == VariantKind::Obstacle,
        })
    }

    const fn preset(win_length: usize, obstacle: bool) -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_length,
            obstacle,
        }
    }

    pub const fn connect3() -> Self {
        Self::preset(3, false)
    }

    pub const fn connect4() -> Self {
        Self::preset(DEFAULT_WIN_LENGTH, false)
    }

    pub const fn connect5() -> Self {
        Self::preset(5, false)
    }

    /// Connect four with the random obstacle.
    pub const fn connect4_plus() -> Self {
        Self::preset(DEFAULT_WIN_LENGTH, true)
    }

    /// Map the interactive game-type choice to a preset: 3 and 5 are the
    /// plain games, 4 is the obstacle game.
    pub fn from_selection(choice: u8) -> Option<Self> {
        match choice {
            3 => Some(Self::connect3()),
            4 => Some(Self::connect4_plus()),
            5 => Some(Self::connect5()),
            _ => None,
        }
    }

    /// Same rules on a board of a different size.
    pub fn with_dimensions(self, rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::new(self.kind(), rows, cols, self.win_length)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn obstacle_enabled(&self) -> bool {
        self.obstacle
    }

    pub fn kind(&self) -> VariantKind {
        if self.obstacle {
            VariantKind::Obstacle
        } else {
            VariantKind::Standard
        }
    }
}

/// Unchecked wire form of [`VariantConfig`]. Decoding goes through
/// [`VariantConfig::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVariantConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
    obstacle: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawVariantConfig> for VariantConfig {
    type Error = BoardError;

    fn try_from(raw: RawVariantConfig) -> Result<Self, BoardError> {
        let kind = if raw.obstacle {
            VariantKind::Obstacle
        } else {
            VariantKind::Standard
        };
        Self::new(kind, raw.rows, raw.cols, raw.win_length)
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self::connect4()
    }
}
