pub mod agent;
pub mod chess;
pub(crate) mod console;
pub(crate) mod error;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        chess::*,
        console::{Console, ConsoleOptions},
        error::{Error, Kind, Result},
    };
}
