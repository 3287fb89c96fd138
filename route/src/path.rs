use std::fmt;

use colony::{Colony, RoomId};

/// A simple path through the colony: starts at the entrance, ends at the exit,
/// and never visits the same room twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    rooms: Vec<RoomId>,
}

impl Path {
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms }
    }

    /// All rooms on the path, including both endpoints.
    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Length of the path in links traversed.
    #[inline]
    pub fn edge_len(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    /// Rooms on the path, excluding the start and end rooms.
    pub fn interior(&self) -> &[RoomId] {
        match self.rooms.len() {
            0..=2 => &[],
            n => &self.rooms[1..n - 1],
        }
    }

    /// true if the two paths share any interior room.
    pub fn overlaps(&self, other: &Path) -> bool {
        let theirs = other.interior();
        self.interior().iter().any(|room| theirs.contains(room))
    }

    /// Display the path using room names, e.g. `start -> a -> end`.
    pub fn display<'a>(&'a self, colony: &'a Colony) -> PathDisplay<'a> {
        PathDisplay { path: self, colony }
    }
}

/// Helper returned by [`Path::display`].
pub struct PathDisplay<'a> {
    path: &'a Path,
    colony: &'a Colony,
}

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, room) in self.path.rooms.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            let name = self.colony.room_name(*room).map_err(|_| fmt::Error)?;
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// The paths chosen for moving ants. Order matters:
/// an `Assignment` refers to paths by their position in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[Path] {
        &self.paths
    }
}

impl From<Vec<Path>> for PathSet {
    fn from(paths: Vec<Path>) -> Self {
        Self { paths }
    }
}
