use std::collections::VecDeque;
use std::io::{BufRead, Write};

use clap::Parser;

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ConsoleOptions
{
    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    /// plies the computer searches
    pub depth: Depth,

    #[arg(short, long, default_value_t = false)]
    /// label every square with its coordinates
    pub coordinates: bool,
}

impl Default for ConsoleOptions
{
    fn default() -> Self
    {
        ConsoleOptions {
            log_level:   "info".into(),
            depth:       DEFAULT_DEPTH,
            coordinates: false,
        }
    }
}

const HELP: &str = "
Type 'h' for help, 'q' to quit, 'p' to print the board, and 'c' to toggle square coordinates.

To move a piece, type the file and rank of its square followed by the file and rank of its destination;
for example, '1715' moves the piece on (file, rank) = (1,7) to (1,5).
";

/// A game of human against computer, played over a text stream of whitespace-separated commands.
pub struct Console<R, W>
{
    options:     ConsoleOptions,
    board:       Board,
    coordinates: bool,
    input:       R,
    pending:     VecDeque<String>,
    output:      W,
}

impl<R: BufRead, W: Write> Console<R, W>
{
    /// Creates a new console reading commands from `input` and writing to `output`.
    pub fn new(options: ConsoleOptions, input: R, output: W) -> Self
    {
        Console {
            coordinates: options.coordinates,
            options,
            board: Board::new(),
            input,
            pending: VecDeque::new(),
            output,
        }
    }

    /// Gets the board of the game in progress.
    pub fn board(&self) -> &Board
    {
        &self.board
    }

    /// Plays games until the human quits or the input runs out.
    pub fn run(&mut self) -> Result<()>
    {
        writeln!(self.output, "\nChess")?;
        self.help()?;

        loop
        {
            self.board.reset();

            let Some(human) = self.pick_side()?
            else
            {
                writeln!(self.output, "See you next time!")?;
                return Ok(());
            };
            log::debug!("new game, human plays {}", human);

            if human == Player::Black
            {
                self.computer_move()?;
            }
            else
            {
                self.print_board()?;
            }

            loop
            {
                if !self.prompt()?
                {
                    writeln!(self.output, "See you again!\n")?;
                    return Ok(());
                }

                if let Some(winner) = self.board.state().winner()
                {
                    log::debug!("{} captured the king", winner);
                    writeln!(self.output, "* Congratulations, you won!")?;
                    break;
                }

                self.computer_move()?;

                if let Some(winner) = self.board.state().winner()
                {
                    log::debug!("{} captured the king", winner);
                    writeln!(self.output, "* You lost, better luck next time!")?;
                    break;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W>
{
    /// Lets the computer play for the side to move, then shows the board.
    fn computer_move(&mut self) -> Result<()>
    {
        let mv = self.board.ai_move_at(self.options.depth);
        if mv.is_some()
        {
            writeln!(self.output, "Computer plays {}", MoveString::from((mv.from, mv.to)))?;
        }
        else
        {
            writeln!(self.output, "Computer has no move")?;
        }
        self.print_board()
    }

    /// Prints the help text.
    fn help(&mut self) -> Result<()>
    {
        writeln!(self.output, "{HELP}")?;
        Ok(())
    }

    /// Asks which side the human plays, or `None` if they want to quit.
    fn pick_side(&mut self) -> Result<Option<Player>>
    {
        loop
        {
            write!(self.output, "\nChoose a side: black ('b'), white ('w'), or 'q' to quit: ")?;
            self.output.flush()?;

            let Some(side) = self.read_token()?
            else
            {
                return Ok(None);
            };

            match side.as_str()
            {
                | "q" => return Ok(None),
                | "w" | "b" => return side.parse::<Player>().map(Some),
                | _ =>
                {
                    let err = Error::new(Kind::UnrecognizedCommand, side);
                    log::debug!("not a side: {err}");
                }
            }
        }
    }

    /// Plays the move in the given move string for the human.
    fn play(&mut self, movestr: &str) -> Result<()>
    {
        let mv = movestr.parse::<MoveString>()?;
        if !self.board.make_move(mv.from, mv.to)
        {
            let err_msg = format!("{} cannot move from {} to {}.", self.board.to_move(), mv.from, mv.to);
            return Err(Error::new(Kind::InvalidMove, err_msg));
        }
        Ok(())
    }

    /// Prints the board, with coordinates if they are toggled on.
    fn print_board(&mut self) -> Result<()>
    {
        if self.coordinates
        {
            write!(self.output, "{:#}", self.board)?;
        }
        else
        {
            write!(self.output, "{}", self.board)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Takes commands until the human has made a legal move.
    ///
    /// Returns false if the human wants to quit.
    fn prompt(&mut self) -> Result<bool>
    {
        loop
        {
            write!(self.output, "{} to move: ", self.board.to_move())?;
            self.output.flush()?;

            let Some(cmd) = self.read_token()?
            else
            {
                return Ok(false);
            };
            log::debug!("command: {cmd}");

            match cmd.as_str()
            {
                | "q" => return Ok(false),
                | "?" | "h" | "help" => self.help()?,
                | "c" =>
                {
                    self.coordinates = !self.coordinates;
                    self.print_board()?;
                }
                | "p" => self.print_board()?,
                | movestr => match self.play(movestr)
                {
                    | Ok(()) =>
                    {
                        self.print_board()?;
                        return Ok(true);
                    }
                    | Err(err) if err.fatal() => return Err(err),
                    | Err(err) =>
                    {
                        log::warn!("encountered recoverable error:\n{err}");
                        writeln!(self.output, "! Illegal move !")?;
                    }
                },
            }
        }
    }

    /// Takes the next command, reading more lines as needed, or `None` at the end of input.
    ///
    /// Commands are separated by any whitespace, so several can share a line, as in `w 1715`.
    fn read_token(&mut self) -> Result<Option<String>>
    {
        while self.pending.is_empty()
        {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0
            {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}
