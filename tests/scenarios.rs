//! End-to-end play-throughs against whole levels.

use dogmaze_game::{builtin_levels, next_step_toward, Dir, Level, Pos, Session};

fn session_from(maps: &[&str]) -> Session {
    let levels = maps.iter().map(|m| Level::parse(m).unwrap()).collect();
    Session::new(levels, 0).unwrap()
}

/// Renders the live board back into map symbols for snapshot assertions.
fn draw(session: &Session) -> String {
    let grid = session.grid();
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Pos::new(x, y);
            let symbol = if session.pursuers().contains(&pos) {
                'D'
            } else if pos == session.player() {
                'P'
            } else if pos == session.finish() {
                'F'
            } else if grid.is_open(pos) {
                '.'
            } else {
                '#'
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

fn assert_board(session: &Session, expected: &str) {
    assert_eq!(draw(session).trim_matches('\n'), expected.trim_matches('\n'));
}

#[test]
fn the_dog_runs_down_the_player_in_the_original_maze() {
    let mut session = Session::new(builtin_levels(), 0).unwrap();
    assert_eq!(session.player(), Pos::new(1, 1));
    assert_eq!(session.pursuers(), &[Pos::new(3, 3)]);

    // Right along the top corridor, then try to turn down; the dog cuts
    // through the center and closes one cell of distance every turn.
    for dir in [Dir::Right, Dir::Right, Dir::Right, Dir::Down, Dir::Down] {
        session.apply_move(dir);
    }

    assert!(session.lost());
    assert!(!session.won());
    // Caught in the top corridor, well short of the finish.
    assert_eq!(session.player(), Pos::new(3, 1));
    assert_eq!(session.pursuers(), &[Pos::new(3, 1)]);
}

#[test]
fn the_player_escapes_when_the_dog_is_fenced_off() {
    // Same maze shape as the original level, but the dog sits in a sealed
    // pocket with no path to the corridors.
    let mut session = session_from(&[r#"
#######
#P..#D#
#.#.###
#.#...#
#.###.#
#....F#
#######
"#]);
    let dog_start = Pos::new(5, 1);

    let route = [
        Dir::Down,
        Dir::Down,
        Dir::Down,
        Dir::Down,
        Dir::Right,
        Dir::Right,
        Dir::Right,
        Dir::Right,
    ];
    for dir in route {
        assert!(!session.lost());
        session.apply_move(dir);
        assert_eq!(session.pursuers(), &[dog_start]);
    }

    assert!(session.won());
    assert!(!session.lost());
    assert_eq!(session.player(), Pos::new(5, 5));
}

#[test]
fn advancing_stops_at_the_last_level() {
    let mut session = session_from(&[
        "#P.F#D#",
        r#"
######
#P.F##
####D#
######
"#,
    ]);

    session.apply_move(Dir::Right);
    session.apply_move(Dir::Right);
    assert!(session.won());
    session.advance_level();
    assert_eq!(session.level_index(), 1);

    session.apply_move(Dir::Right);
    session.apply_move(Dir::Right);
    assert!(session.won());

    // Last level: advancing goes nowhere and keeps the won flag.
    session.advance_level();
    assert_eq!(session.level_index(), 1);
    assert!(session.won());
}

#[test]
fn two_dogs_chase_the_same_target_independently() {
    let map = r#"
#########
#D..P..D#
####F####
"#;
    let mut session = session_from(&[map]);
    let level = Level::parse(map).unwrap();

    session.apply_move(Dir::Left);
    let target = session.player();
    assert_eq!(target, Pos::new(3, 1));

    // Each dog's step equals a fresh standalone search from its own start;
    // neither sees the other.
    let expected: Vec<Pos> = level
        .pursuer_starts()
        .iter()
        .map(|&dog| next_step_toward(level.grid(), dog, target))
        .collect();
    assert_eq!(session.pursuers(), expected.as_slice());
    assert_board(
        &session,
        r#"
#########
#.DP..D.#
####F####
"#,
    );

    session.apply_move(Dir::Right);
    assert_board(
        &session,
        r#"
#########
#..DPD..#
####F####
"#,
    );
    assert!(!session.lost());
}

#[test]
fn every_builtin_level_is_winnable_and_hunted() {
    for level in builtin_levels() {
        let grid = level.grid();
        let bound = grid.width() * grid.height();

        // The finish must be reachable from the player start.
        let mut probe = level.player_start();
        let mut steps = 0;
        while probe != level.finish() {
            let next = next_step_toward(grid, probe, level.finish());
            assert_ne!(next, probe, "finish unreachable from {probe}");
            probe = next;
            steps += 1;
            assert!(steps <= bound);
        }

        // And every dog must be able to reach the player start.
        for &dog in level.pursuer_starts() {
            let mut probe = dog;
            let mut steps = 0;
            while probe != level.player_start() {
                let next = next_step_toward(grid, probe, level.player_start());
                assert_ne!(next, probe, "player start unreachable from {probe}");
                probe = next;
                steps += 1;
                assert!(steps <= bound);
            }
        }
    }
}
