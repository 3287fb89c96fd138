mod id;
pub use id::RoomId;

mod builder;
pub use builder::ColonyBuilder;

mod colony;
pub use colony::Colony;

/// Largest ant count accepted from a colony file.
/// Every round of the solution is materialized, so the count bounds memory use.
pub const MAX_ANTS: u32 = 1_000_000;

/// Command that marks the room defined on the following line as the entrance.
pub const START_COMMAND: &str = "##start";
/// Command that marks the room defined on the following line as the exit.
pub const END_COMMAND: &str = "##end";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing number of ants")]
    MissingAntCount,
    #[error("invalid number of ants: '{0}'")]
    InvalidAntCount(String),
    #[error("number of ants must be positive")]
    NoAnts,
    #[error("too many ants: {0} (at most {})", MAX_ANTS)]
    TooManyAnts(u32),
    #[error("invalid room name: '{0}' (names can't start with 'L' or '#', or contain spaces or '-')")]
    InvalidRoomName(String),
    #[error("duplicate room name: {0}")]
    DuplicateRoom(String),
    #[error("duplicate room coordinates: {0} {1}")]
    DuplicateCoords(i64, i64),
    #[error("room does not exist: {0}")]
    UnknownRoom(String),
    #[error("room cannot link to itself: {0}")]
    SelfLink(String),
    #[error("duplicate room connection: {0}-{1}")]
    DuplicateLink(String, String),
    #[error("{0} defined more than once")]
    DuplicateCommand(&'static str),
    #[error("{0} must be followed by a room definition")]
    CommandWithoutRoom(&'static str),
    #[error("unrecognized command, room or link: {0}")]
    UnexpectedLine(String),
    #[error("no colony starting point defined")]
    MissingStart,
    #[error("no colony ending point defined")]
    MissingEnd,
}
