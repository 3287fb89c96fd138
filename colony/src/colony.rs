use anyhow::{Context, Result};

use intern::{GetStr, LookupStr};
use syntax::ast::{Line, Room};
use util::IdVec;

use crate::builder::RoomNames;
use crate::{ColonyBuilder, Error, RoomId, END_COMMAND, MAX_ANTS, START_COMMAND};

/// An ant colony: rooms connected by bidirectional links,
/// with a designated entrance and exit, and some number of ants.
/// Immutable once built.
#[derive(Debug)]
pub struct Colony {
    pub(crate) ants: u32,
    pub(crate) start: RoomId,
    pub(crate) end: RoomId,
    pub(crate) names: RoomNames,
    pub(crate) links: IdVec<RoomId, Vec<RoomId>>,
}

/// Which command (if any) is waiting for its room definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Nothing,
    Start,
    End,
}

impl Pending {
    fn command(self) -> &'static str {
        match self {
            Pending::Start => START_COMMAND,
            Pending::End => END_COMMAND,
            Pending::Nothing => "",
        }
    }
}

impl Colony {
    /// Validate the parsed lines of a colony file and build a `Colony` from them.
    /// The first line must be the ant count; rooms and links can be interleaved after that.
    pub fn load(lines: Vec<Line>) -> Result<Self> {
        let mut lines = lines.into_iter();
        let ants = match lines.next() {
            Some(Line::Word(word)) => parse_ants(word)?,
            _ => return Err(Error::MissingAntCount.into()),
        };

        let mut builder = ColonyBuilder::default();
        builder.ants(ants);
        let mut pending = Pending::Nothing;

        for line in lines {
            match (line, pending) {
                (Line::Room(room), _) => pending = add_room(&mut builder, room, pending)?,
                (_, Pending::Start | Pending::End) => {
                    return Err(Error::CommandWithoutRoom(pending.command()).into())
                }
                (Line::Start, _) => pending = Pending::Start,
                (Line::End, _) => pending = Pending::End,
                (Line::Link(a, b), _) => {
                    builder
                        .link(a, b)
                        .with_context(|| format!("in link '{a}-{b}'"))?;
                }
                (Line::Word(word), _) => return Err(Error::UnexpectedLine(word.to_owned()).into()),
            }
        }
        if pending != Pending::Nothing {
            return Err(Error::CommandWithoutRoom(pending.command()).into());
        }

        let colony = builder.build()?;
        log::debug!(
            "loaded colony: {} ants, {} rooms, {} links",
            colony.ants,
            colony.num_rooms(),
            colony.num_links()
        );
        Ok(colony)
    }

    /// Build a colony from a list of links, creating rooms as they are first mentioned.
    /// Handy for tests and small programmatic colonies.
    pub fn from_links(ants: u32, start: &str, end: &str, links: &[(&str, &str)]) -> Result<Self> {
        let mut builder = ColonyBuilder::default();
        builder.ants(ants);
        let mut next_x = 0;
        let mut ensure = |builder: &mut ColonyBuilder, name: &str| -> Result<RoomId> {
            match builder.names.lookup(name) {
                Some(id) => Ok(id),
                None => {
                    next_x += 1;
                    builder.room(name, next_x, 0)
                }
            }
        };
        let start_id = ensure(&mut builder, start)?;
        let end_id = ensure(&mut builder, end)?;
        for (a, b) in links {
            ensure(&mut builder, a)?;
            ensure(&mut builder, b)?;
        }
        builder.start(start_id)?.end(end_id)?;
        for (a, b) in links {
            builder.link(a, b)?;
        }
        builder.build()
    }

    /// Number of ants waiting in the entrance room.
    #[inline]
    pub fn ants(&self) -> u32 {
        self.ants
    }

    #[inline]
    pub fn start(&self) -> RoomId {
        self.start
    }

    #[inline]
    pub fn end(&self) -> RoomId {
        self.end
    }

    /// Rooms linked to `room`, in the order the links were declared.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        self.links.get(room)
    }

    /// Get the name of the given room.
    pub fn room_name(&self, room: RoomId) -> Result<&str> {
        self.names.get(room)
    }

    /// Find a room by name.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.names.lookup(name)
    }

    #[inline]
    pub fn num_rooms(&self) -> usize {
        self.links.len()
    }

    /// Number of (undirected) links.
    pub fn num_links(&self) -> usize {
        self.links.iter().map(Vec::len).sum::<usize>() / 2
    }
}

fn parse_ants(word: &str) -> Result<u32> {
    let ants = word
        .parse::<u32>()
        .map_err(|_| Error::InvalidAntCount(word.to_owned()))?;
    if ants == 0 {
        return Err(Error::NoAnts.into());
    }
    if ants > MAX_ANTS {
        return Err(Error::TooManyAnts(ants).into());
    }
    Ok(ants)
}

fn add_room(builder: &mut ColonyBuilder, room: Room, pending: Pending) -> Result<Pending> {
    let Room { name, x, y } = room;
    let id = builder.room(name, x, y)?;
    match pending {
        Pending::Start => builder.start(id).map(|_| ())?,
        Pending::End => builder.end(id).map(|_| ())?,
        Pending::Nothing => (),
    }
    Ok(Pending::Nothing)
}
