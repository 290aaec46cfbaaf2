use std::fmt::Write;

use crate::prelude::*;

const FILES: &str = "        1     2     3     4     5     6     7     8";

impl Board
{
    /// Standard debug.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board {{ turn: {:?}, white: {:?}, black: {:?} }}", self.turn, self.white, self.black)
    }

    /// Pretty print, with black's side at the top.
    ///
    /// White pieces are upper case and black pieces lower case. With `coordinates`, every square is labelled with
    /// the two digits that name it in a move string.
    pub(super) fn pretty(&self, f: &mut std::fmt::Formatter<'_>, coordinates: bool) -> std::fmt::Result
    {
        writeln!(f, "\n                        {}\n", Player::Black)?;
        writeln!(f, "{FILES}")?;
        write!(f, "      _____ _____ _____ _____ _____ _____ _____ _____")?;

        for y in 1..=pos::consts::SIDE
        {
            let mut labels = String::from("     |");
            let mut squares = format!("  {y}  ");
            for x in 1..=pos::consts::SIDE
            {
                if coordinates
                {
                    write!(labels, "{x}{y}   |")?;
                }
                else
                {
                    labels.push_str("     |");
                }

                let symbol = match self.piece_at(Pos::new(x, y))
                {
                    | Some((Player::White, kind)) => kind.symbol(),
                    | Some((Player::Black, kind)) => kind.symbol().to_ascii_lowercase(),
                    | None => ' ',
                };
                write!(squares, "|  {symbol}  ")?;
            }

            write!(f, "\n{labels}\n{squares}|  {y}\n     |_____|_____|_____|_____|_____|_____|_____|_____|")?;
        }

        writeln!(f, "\n{FILES}\n")?;
        writeln!(f, "                        {}", Player::White)
    }
}
