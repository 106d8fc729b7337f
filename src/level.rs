//! Level definitions: a maze grid plus the cells of interest. Levels are
//! static data; a session only ever reads them.

use crate::error::MalformedLevel;
use crate::grid::{Grid, Pos, Tile};

/// One maze: grid geometry, player start, at least one pursuer start, and
/// the finish cell. Every named cell must be an open in-bounds cell.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Level {
    grid: Grid,
    player_start: Pos,
    pursuer_starts: Vec<Pos>,
    finish: Pos,
}

impl Level {
    pub fn new(
        rows: Vec<Vec<Tile>>,
        player_start: Pos,
        pursuer_starts: Vec<Pos>,
        finish: Pos,
    ) -> Result<Self, MalformedLevel> {
        let grid = build_grid(rows)?;
        if pursuer_starts.is_empty() {
            return Err(MalformedLevel::NoPursuers);
        }
        check_open(&grid, "player start", player_start)?;
        for &start in &pursuer_starts {
            check_open(&grid, "pursuer start", start)?;
        }
        check_open(&grid, "finish", finish)?;
        Ok(Self {
            grid,
            player_start,
            pursuer_starts,
            finish,
        })
    }

    /// Builds a level from an ASCII map: `#` wall, `.` open, `P` player
    /// start, `D` pursuer start, `F` finish. `P`, `D` and `F` stand on open
    /// cells. Blank lines around the map are ignored so maps can be written
    /// as raw-string literals.
    pub fn parse(map: &str) -> Result<Self, MalformedLevel> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        let mut player = None;
        let mut pursuers = Vec::new();
        let mut finish = None;

        for line in map.lines().filter(|line| !line.trim().is_empty()) {
            let y = rows.len();
            let mut row = Vec::with_capacity(line.len());
            for (x, symbol) in line.chars().enumerate() {
                let at = Pos::new(x, y);
                let tile = match symbol {
                    '#' => Tile::Wall,
                    '.' => Tile::Open,
                    'P' => {
                        if player.replace(at).is_some() {
                            return Err(MalformedLevel::DuplicatePlayerStart);
                        }
                        Tile::Open
                    }
                    'D' => {
                        pursuers.push(at);
                        Tile::Open
                    }
                    'F' => {
                        if finish.replace(at).is_some() {
                            return Err(MalformedLevel::DuplicateFinish);
                        }
                        Tile::Open
                    }
                    _ => return Err(MalformedLevel::UnknownSymbol { symbol, at }),
                };
                row.push(tile);
            }
            rows.push(row);
        }

        let player = player.ok_or(MalformedLevel::MissingPlayerStart)?;
        let finish = finish.ok_or(MalformedLevel::MissingFinish)?;
        Self::new(rows, player, pursuers, finish)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player_start(&self) -> Pos {
        self.player_start
    }

    pub fn pursuer_starts(&self) -> &[Pos] {
        &self.pursuer_starts
    }

    pub fn finish(&self) -> Pos {
        self.finish
    }
}

fn build_grid(rows: Vec<Vec<Tile>>) -> Result<Grid, MalformedLevel> {
    if rows.is_empty() || rows[0].is_empty() {
        return Err(MalformedLevel::EmptyGrid);
    }
    let expected = rows[0].len();
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(MalformedLevel::RaggedRow {
                row,
                found: cells.len(),
                expected,
            });
        }
    }
    Ok(Grid::from_rows(rows))
}

fn check_open(grid: &Grid, role: &'static str, at: Pos) -> Result<(), MalformedLevel> {
    match grid.tile(at) {
        None => Err(MalformedLevel::CellOutOfBounds { role, at }),
        Some(Tile::Wall) => Err(MalformedLevel::CellNotOpen { role, at }),
        Some(Tile::Open) => Ok(()),
    }
}

/// The shipped level set, smallest maze first. The first map is the
/// original 7x7 one-dog maze; later ones grow up to 17x17 with six dogs.
pub fn builtin_levels() -> Vec<Level> {
    BUILTIN_MAPS
        .iter()
        .map(|map| Level::parse(map).expect("built-in level data is valid"))
        .collect()
}

const BUILTIN_MAPS: [&str; 4] = [
    r#"
#######
#P..#.#
#.#.#.#
#.#D..#
#.###.#
#....F#
#######
"#,
    r#"
#########
#P.....D#
#.###.#.#
#.#...#.#
#.#.###.#
#.#.#D..#
#.#.#.###
#...#..F#
#########
"#,
    r#"
###########
#P........#
#.#######.#
#.#D....#.#
#.#.###.#.#
#.#.#D#.#.#
#.#.#.#.#.#
#.#.#.#.#.#
#.#.#.#.#.#
#D..#...#F#
###########
"#,
    r#"
#################
#P..............#
#.#.#.#.#D#.#.#.#
#.#.#.#.#.#.#.#.#
#.#D#.#.#.#.#.#.#
#.#.#.#.#.#.#.#.#
#.#.#.#.#.#D#.#.#
#.#.#.#.#.#.#.#.#
#.#.#.#.#.#.#.#D#
#.#.#.#.#.#.#.#.#
#.#.#.#D#.#.#.#.#
#.#.#.#.#.#.#.#.#
#.#.#.#.#.#.#.#.#
#.#.#D#.#.#.#.#.#
#.#.#.#.#.#.#.#.#
#..............F#
#################
"#,
];
