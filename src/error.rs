//! Load-time errors. Gameplay has none: wall bumps, off-grid moves and
//! unreachable pursuit targets are all defined as no-ops.

use crate::grid::Pos;

/// A level was selected outside the loaded level list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[error("level index {index} out of range (have {count} levels)")]
pub struct InvalidLevelIndex {
    pub index: usize,
    pub count: usize,
}

/// A level definition violated a construction invariant. The session never
/// starts on malformed data; these are rejected at load time.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum MalformedLevel {
    #[error("level grid has no cells")]
    EmptyGrid,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown map symbol {symbol:?} at {at}")]
    UnknownSymbol { symbol: char, at: Pos },

    #[error("level has no player start")]
    MissingPlayerStart,

    #[error("level has more than one player start")]
    DuplicatePlayerStart,

    #[error("level has no pursuers")]
    NoPursuers,

    #[error("level has no finish cell")]
    MissingFinish,

    #[error("level has more than one finish cell")]
    DuplicateFinish,

    #[error("{role} at {at} is out of bounds")]
    CellOutOfBounds { role: &'static str, at: Pos },

    #[error("{role} at {at} is not an open cell")]
    CellNotOpen { role: &'static str, at: Pos },
}
