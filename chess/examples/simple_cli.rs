// Simple command-line application to play a timed game

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use blitzchess::board::PrettyStyle;
use blitzchess::{Color, Game, Square};

fn parse_move(s: &str) -> Option<(Square, Square)> {
    let s = s.trim();
    if !s.is_ascii() || s.len() != 4 {
        return None;
    }
    let from = Square::from_str(&s[0..2]).ok()?;
    let to = Square::from_str(&s[2..4]).ok()?;
    Some((from, to))
}

fn side_name(c: Color) -> &'static str {
    match c {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut game = Game::new();
    loop {
        writeln!(stdout, "{}", game.position().pretty(PrettyStyle::Ascii))?;
        if let Some(winner) = game.winner() {
            writeln!(stdout, "{} wins!", side_name(winner))?;
            writeln!(stdout, "moves: {}", game.history().join(" "))?;
            return Ok(());
        }
        write!(stdout, "{} move> ", side_name(game.turn()))?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        match parse_move(&line) {
            Some((from, to)) => {
                if let Err(err) = game.try_make_move(from, to) {
                    writeln!(stdout, "{}", err)?;
                }
            }
            None => writeln!(stdout, "moves look like e2e4")?,
        }
    }
}
