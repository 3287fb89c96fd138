#[macro_use]
mod macros;
mod parse;
pub use parse::{echo_lines, parse, Error};
pub mod ast;
