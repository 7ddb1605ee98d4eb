//! Console menu and stdin-driven round I/O for the `play` binary.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tictactoe::{GameSession, Mark, RoundIo, RoundOutcome, MAX_BOARD_SIZE};

/// Runs the startup menu until the user exits or stdin closes.
pub fn run(board_size: Option<usize>, rng: &mut impl Rng) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("Menu:");
        println!("1. Play the game");
        println!("2. Exit");
        let Some(choice) = prompt_line(&mut input, "Enter your choice: ")? else {
            break;
        };
        match choice.trim() {
            "1" => {
                let Some(mut session) = make_session(&mut input, board_size)? else {
                    break;
                };
                let mut console = ConsoleIo { input: &mut input };
                session.run_round(&mut console, rng)?;
            }
            "2" => break,
            other => println!("Unknown choice: {}", other),
        }
    }

    Ok(())
}

/// Builds a session from `--board-size`, or prompts for a size until the
/// core accepts one. Returns `None` when stdin closes at the prompt.
fn make_session(input: &mut impl BufRead, board_size: Option<usize>) -> Result<Option<GameSession>> {
    if let Some(size) = board_size {
        let session = GameSession::new(size).context("--board-size")?;
        return Ok(Some(session));
    }

    let prompt = format!("Enter the size of the board (max {}): ", MAX_BOARD_SIZE);
    loop {
        let Some(line) = prompt_line(input, &prompt)? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(size) => match GameSession::new(size) {
                Ok(session) => return Ok(Some(session)),
                Err(err) => println!("{}", err),
            },
            Err(_) => println!("Please enter a number."),
        }
    }
}

/// Prints `prompt` without a newline and reads one input line.
/// Returns `None` at end of input.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line))
}

/// Coordinate typed at the move prompt.
struct CellCoord(usize, usize);

impl FromStr for CellCoord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 2 {
            return Err("Expected format: row column".to_string());
        }
        let row = parts[0].parse::<usize>().map_err(|e| e.to_string())?;
        let col = parts[1].parse::<usize>().map_err(|e| e.to_string())?;
        Ok(CellCoord(row, col))
    }
}

/// [`RoundIo`] over stdin/stdout.
struct ConsoleIo<'a, R: BufRead> {
    input: &'a mut R,
}

impl<R: BufRead> RoundIo for ConsoleIo<'_, R> {
    fn request_move(&mut self, session: &GameSession) -> Result<(usize, usize)> {
        loop {
            println!("Current Board:");
            print!("{}", session.grid());
            let Some(line) = prompt_line(self.input, "Your turn (row column): ")? else {
                bail!("input closed in the middle of a round");
            };
            match line.parse::<CellCoord>() {
                Ok(CellCoord(row, col)) => return Ok((row, col)),
                Err(err) => println!("{}", err),
            }
        }
    }

    fn move_rejected(&mut self, _row: usize, _col: usize) {
        println!("{}", "Invalid move. Try again.".red());
    }

    fn computer_moved(&mut self, _session: &GameSession, row: usize, col: usize) {
        println!("Computer's turn:");
        println!("Computer places {} at ({} {})", Mark::Computer, row, col);
    }

    fn round_over(&mut self, session: &GameSession, outcome: RoundOutcome) {
        println!("Current Board:");
        print!("{}", session.grid());
        let line = match outcome {
            RoundOutcome::Win(Mark::Human) => "Congratulations! You win!".green().bold(),
            RoundOutcome::Win(Mark::Computer) => "Sorry! Computer wins!".red().bold(),
            RoundOutcome::Draw => "It's a draw!".yellow().bold(),
        };
        println!("{}", line);
    }
}
