/// One meaningful line of a colony file.
/// Blank lines and comments never make it into the ast.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// `##start`: the next room is the colony entrance
    Start,
    /// `##end`: the next room is the colony exit
    End,
    /// `name x y`
    Room(Room<'a>),
    /// `a-b`
    Link(&'a str, &'a str),
    /// A lone token, e.g. the ant count on the first line.
    Word(&'a str),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Room<'a> {
    pub name: &'a str,
    pub x: i64,
    pub y: i64,
}

// These methods are just to assist with writing more legible tests.
impl<'a> Line<'a> {
    pub fn room(name: &'a str, x: i64, y: i64) -> Self {
        Self::Room(Room { name, x, y })
    }
}
