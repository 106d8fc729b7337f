//! Turn-based maze pursuit: a player walks a walled grid one cell per
//! input while dogs re-run a shortest-path search and take one step toward
//! the player's new cell every turn. Reaching the finish wins; a dog on the
//! player's cell loses.

pub mod error;
pub mod grid;
pub mod level;
pub mod pursuit;
pub mod session;

pub use error::{InvalidLevelIndex, MalformedLevel};
pub use grid::{Dir, Grid, Pos, Tile};
pub use level::{builtin_levels, Level};
pub use pursuit::next_step_toward;
pub use session::{Phase, Session};
