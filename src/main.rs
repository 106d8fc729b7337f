use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use std::io::{self, Stdout, Write};
use unicode_width::UnicodeWidthStr;

use dogmaze_game::{builtin_levels, Dir, Phase, Pos, Session, Tile};

const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Player,
    Caught,
    Dog,
    Finish,
    Wall,
    Open,
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    glyph: Glyph,
    color: Color,
}

struct Renderer {
    last: Vec<Cell>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            last: vec![
                Cell {
                    glyph: Glyph::Open,
                    color: Color::Reset,
                };
                width * height
            ],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout) -> io::Result<()> {
    let levels = builtin_levels();
    let start = read_start_level(levels.len());
    let mut session =
        Session::new(levels, start).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut renderer = Renderer::new(session.grid().width(), session.grid().height());
    render(stdout, &session, &mut renderer)?;

    loop {
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') => session.reset(),
                    KeyCode::Char('n') => {
                        let before = session.level_index();
                        session.advance_level();
                        if session.level_index() != before {
                            renderer =
                                Renderer::new(session.grid().width(), session.grid().height());
                            stdout.execute(Clear(ClearType::All))?;
                        }
                    }
                    code => {
                        if let Some(dir) = dir_for_key(code) {
                            session.apply_move(dir);
                        }
                    }
                }
            }
            Event::Resize(_, _) => renderer.needs_full = true,
            _ => continue,
        }
        render(stdout, &session, &mut renderer)?;
    }
}

fn dir_for_key(code: KeyCode) -> Option<Dir> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Dir::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Dir::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Dir::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Dir::Right),
        _ => None,
    }
}

fn read_start_level(count: usize) -> usize {
    std::env::var("DOGMAZE_LEVEL")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v >= 1 && *v <= count)
        .map(|v| v - 1)
        .unwrap_or(0)
}

fn render(stdout: &mut Stdout, session: &Session, renderer: &mut Renderer) -> io::Result<()> {
    let width = session.grid().width();
    let height = session.grid().height();
    let needed_h = (height + 2) as u16;
    let needed_w = (width * CELL_W) as u16;

    stdout.queue(MoveTo(0, 0))?;

    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2 + 1;
    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
    }

    let hud = hud_line(session);
    if renderer.needs_full || hud != renderer.last_hud {
        stdout.queue(MoveTo(0, renderer.origin_y - 1))?;
        stdout.queue(SetForegroundColor(Color::White))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y - 1))?;
        stdout.queue(Print(&hud))?;
        stdout.queue(ResetColor)?;
        renderer.last_hud = hud;
    }

    for y in 0..height {
        for x in 0..width {
            let cell = cell_for(session, Pos::new(x, y));
            let idx = y * width + x;
            if renderer.needs_full || cell != renderer.last[idx] {
                renderer.last[idx] = cell;
                draw_cell(stdout, renderer, x, y, cell)?;
            }
        }
    }
    renderer.needs_full = false;

    stdout.flush()?;
    Ok(())
}

fn hud_line(session: &Session) -> String {
    let status = match session.phase() {
        Phase::Playing => "escape the dogs!",
        Phase::Won if session.level_index() + 1 < session.level_count() => {
            "you escaped! (n: next level)"
        }
        Phase::Won => "all levels clear!",
        Phase::Lost => "caught! (r: retry)",
    };
    format!(
        "Level: {}/{}  {}  (arrows/hjkl: move, r: reset, q: quit)",
        session.level_index() + 1,
        session.level_count(),
        status
    )
}

fn cell_for(session: &Session, pos: Pos) -> Cell {
    if pos == session.player() {
        if session.phase() == Phase::Lost {
            return Cell {
                glyph: Glyph::Caught,
                color: Color::Red,
            };
        }
        return Cell {
            glyph: Glyph::Player,
            color: Color::Yellow,
        };
    }
    if session.pursuers().contains(&pos) {
        return Cell {
            glyph: Glyph::Dog,
            color: Color::Red,
        };
    }
    if pos == session.finish() {
        return Cell {
            glyph: Glyph::Finish,
            color: Color::Green,
        };
    }
    match session.grid().tile(pos) {
        Some(Tile::Wall) => Cell {
            glyph: Glyph::Wall,
            color: Color::Blue,
        },
        _ => Cell {
            glyph: Glyph::Open,
            color: Color::Reset,
        },
    }
}

fn draw_cell(
    stdout: &mut Stdout,
    renderer: &Renderer,
    x: usize,
    y: usize,
    cell: Cell,
) -> io::Result<()> {
    let (text, color) = match cell.glyph {
        Glyph::Player => ("😃", cell.color),
        Glyph::Caught => ("😱", cell.color),
        Glyph::Dog => ("🐶", cell.color),
        Glyph::Finish => ("🚩", cell.color),
        Glyph::Wall => ("██", cell.color),
        Glyph::Open => ("  ", cell.color),
    };
    let x_pos = renderer.origin_x + (x * CELL_W) as u16;
    let y_pos = renderer.origin_y + y as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}
