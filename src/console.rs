use std::io::{self, BufRead, Write};

use crate::board::{within_bounds, Color, Square};
use crate::game::{GameState, Phase};
use crate::search::strategy::{AiPlayer, Difficulty};

/// Line-oriented front end: a human clicks squares, the machine answers
/// as soon as the human's turn is over.
pub struct Session {
    game: GameState,
    ai: AiPlayer,
    human: Color,
}

impl Session {
    pub fn new(ai: AiPlayer, human: Color) -> Self {
        Self { game: GameState::new(), ai, human }
    }

    pub fn game(&self) -> &GameState { &self.game }

    fn cmd_new<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.game = GameState::new();
        writeln!(out, "new game, {} to move", self.game.current())?;
        self.ai_reply(out)
    }

    fn cmd_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.game.board())?;
        writeln!(out, "{} to move", self.game.current())
    }

    fn cmd_moves<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let from = match self.game.phase() {
            Phase::PieceSelected { from, .. } | Phase::AwaitingContinuation { from, .. } => *from,
            _ => return writeln!(out, "no piece selected"),
        };
        let dests: Vec<String> = self.game.held_moves().iter().map(|m| m.to.to_string()).collect();
        if dests.is_empty() { writeln!(out, "{from} has no moves") } else { writeln!(out, "{from}: {}", dests.join(" ")) }
    }

    fn cmd_click<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        let mut tokens = args.split_whitespace().map(|t| t.parse::<i32>());
        let sq = match (tokens.next(), tokens.next()) {
            (Some(Ok(r)), Some(Ok(c))) if within_bounds(r, c) => Square::new(r as usize, c as usize),
            _ => return writeln!(out, "usage: click <row 0-7> <col 0-7>"),
        };
        if self.game.is_over() { return self.report_over(out); }
        if self.game.current() != self.human { return writeln!(out, "not your turn"); }
        match self.game.click(sq) {
            Some(applied) => {
                writeln!(out, "moved {}", applied.leg)?;
                if let Some(at) = self.game.continuation() {
                    return writeln!(out, "continue capturing with {at}");
                }
                self.ai_reply(out)
            }
            None => self.cmd_moves(out),
        }
    }

    fn cmd_difficulty<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        match args.parse::<Difficulty>() {
            Ok(d) => { self.ai.difficulty = d; writeln!(out, "difficulty {d}") }
            Err(e) => writeln!(out, "{e}"),
        }
    }

    fn ai_reply<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.game.is_over() { return self.report_over(out); }
        if self.game.current() == self.human { return Ok(()); }
        let legs = self.ai.play_turn(&mut self.game);
        let text: Vec<String> = legs.iter().map(|l| l.to_string()).collect();
        writeln!(out, "ai plays {}", text.join(" "))?;
        if self.game.is_over() { self.report_over(out) } else { Ok(()) }
    }

    fn report_over<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.game.no_moves() {
            Some(c) => writeln!(out, "no legal moves for {c}, {} wins", c.opponent()),
            None => Ok(()),
        }
    }

    /// Handles one command. Returns `false` on `quit`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            "" => {}
            "quit" => return Ok(false),
            "new" => self.cmd_new(out)?,
            "board" => self.cmd_board(out)?,
            "moves" => self.cmd_moves(out)?,
            "click" => self.cmd_click(rest, out)?,
            "difficulty" => self.cmd_difficulty(rest, out)?,
            "go" => self.ai_reply(out)?,
            other => writeln!(out, "unknown command {other:?}")?,
        }
        Ok(true)
    }

    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.ai_reply(out)?;
        for line in input.lines() {
            let line = line?;
            if !self.handle_line(&line, out)? { break; }
            out.flush()?;
        }
        Ok(())
    }
}
