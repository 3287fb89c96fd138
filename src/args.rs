use clap::Parser;

const CMD_NAME: &str = "lem-in";

/// Stores our command-line args format.
#[derive(Parser, Debug)]
#[command(name = CMD_NAME, version, about = None, long_about = None)]
pub struct Args {
    /// Colony description file
    #[arg(value_name = "FILE", env = "LEMIN_INPUT")]
    pub file: String,

    /// Print progress and debugging info (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print only the moves, not the colony description
    #[arg(short, long)]
    pub moves_only: bool,

    /// Print the chosen paths and round count to stderr
    #[arg(short, long)]
    pub summary: bool,
}
