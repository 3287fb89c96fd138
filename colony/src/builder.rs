use anyhow::Result;

use intern::{InternStr, LookupStr, PackedInterner, TypedInterner};
use util::{HashSet, Hasher, IdVec};

use crate::{Colony, Error, RoomId, END_COMMAND, START_COMMAND};

pub(crate) type RoomNames = TypedInterner<RoomId, PackedInterner<u32, usize>>;

/// Builds a `Colony` one room and link at a time,
/// validating each addition as it is made.
#[derive(Debug)]
pub struct ColonyBuilder {
    ants: u32,
    start: Option<RoomId>,
    end: Option<RoomId>,
    pub(crate) names: RoomNames,
    links: IdVec<RoomId, Vec<RoomId>>,
    seen_coords: HashSet<(i64, i64)>,
}

impl Default for ColonyBuilder {
    fn default() -> Self {
        Self {
            ants: 0,
            start: None,
            end: None,
            names: TypedInterner::new(PackedInterner::with_capacity_and_avg_len(64, 8)),
            links: IdVec::with_capacity(64),
            seen_coords: HashSet::with_capacity_and_hasher(64, Hasher::default()),
        }
    }
}

impl ColonyBuilder {
    /// Set the number of ants that start in the entrance room.
    pub fn ants(&mut self, ants: u32) -> &mut Self {
        self.ants = ants;
        self
    }

    /// Add a room with the given name and coordinates, returning its id.
    pub fn room(&mut self, name: &str, x: i64, y: i64) -> Result<RoomId> {
        if !is_valid_name(name) {
            return Err(Error::InvalidRoomName(name.to_owned()).into());
        }
        if self.names.lookup(name).is_some() {
            return Err(Error::DuplicateRoom(name.to_owned()).into());
        }
        if !self.seen_coords.insert((x, y)) {
            return Err(Error::DuplicateCoords(x, y).into());
        }
        let id = self.names.intern(name)?;
        let link_id = self.links.push(Vec::new());
        debug_assert!(id == link_id);
        Ok(id)
    }

    /// Mark an already-added room as the entrance.
    pub fn start(&mut self, room: RoomId) -> Result<&mut Self> {
        if self.start.replace(room).is_some() {
            return Err(Error::DuplicateCommand(START_COMMAND).into());
        }
        Ok(self)
    }

    /// Mark an already-added room as the exit.
    pub fn end(&mut self, room: RoomId) -> Result<&mut Self> {
        if self.end.replace(room).is_some() {
            return Err(Error::DuplicateCommand(END_COMMAND).into());
        }
        Ok(self)
    }

    /// Connect two rooms by name. Links are bidirectional.
    pub fn link(&mut self, a: &str, b: &str) -> Result<&mut Self> {
        let a_id = self.lookup(a)?;
        let b_id = self.lookup(b)?;
        if a_id == b_id {
            return Err(Error::SelfLink(a.to_owned()).into());
        }
        // checking one side suffices, since both sides are always pushed together:
        if self.links.get(a_id).contains(&b_id) {
            return Err(Error::DuplicateLink(a.to_owned(), b.to_owned()).into());
        }
        self.links.get_mut(a_id).push(b_id);
        self.links.get_mut(b_id).push(a_id);
        Ok(self)
    }

    /// Finish building. Fails if either the entrance or the exit was never set.
    pub fn build(self) -> Result<Colony> {
        let start = self.start.ok_or(Error::MissingStart)?;
        let end = self.end.ok_or(Error::MissingEnd)?;
        Ok(Colony {
            ants: self.ants,
            start,
            end,
            names: self.names,
            links: self.links,
        })
    }

    fn lookup(&self, name: &str) -> Result<RoomId> {
        self.names
            .lookup(name)
            .ok_or_else(|| Error::UnknownRoom(name.to_owned()).into())
    }
}

/// Room names can't start with 'L' (reserved for ants in the output) or '#'
/// (reserved for comments), and can't contain whitespace or '-' (reserved for links).
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('L')
        && !name.starts_with('#')
        && !name.chars().any(|c| c.is_whitespace() || c == '-')
}
