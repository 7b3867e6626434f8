//! Application core: loop state, command set, interpreter and the port
//! traits that separate them from the board.

pub mod commands;
pub mod interpreter;
pub mod ports;
pub mod state;
