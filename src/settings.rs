use anyhow::Result;
use std::path::PathBuf;

use crate::args::Args;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("colony file \"{0}\" does not exist")]
    InputNotFound(String),
    #[error("colony file \"{0}\" is not a file")]
    InputNotFile(String),
}

/// Settings are like Args, except the input path has been checked.
#[derive(Debug)]
pub struct Settings {
    pub input: PathBuf,
    pub verbose: u8,
    pub moves_only: bool,
    pub summary: bool,
}

impl TryFrom<Args> for Settings {
    type Error = anyhow::Error;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let input = PathBuf::from(&args.file);
        if !input.exists() {
            return Err(Error::InputNotFound(args.file).into());
        }
        if !input.is_file() {
            return Err(Error::InputNotFile(args.file).into());
        }

        Ok(Self {
            input: input.canonicalize()?,
            verbose: args.verbose,
            moves_only: args.moves_only,
            summary: args.summary,
        })
    }
}
