use std::fmt;

use colony::Colony;

use crate::PathSet;

/// Ants are numbered from 1, in the order they leave the start room.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AntId(pub u32);

impl fmt::Display for AntId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which ants take which path: lane `i` holds the ants sent down
/// the path at position `i` of a `PathSet`, in the order they enter it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    lanes: Vec<Vec<AntId>>,
}

impl Assignment {
    pub fn new(lanes: Vec<Vec<AntId>>) -> Self {
        Self { lanes }
    }

    pub fn lanes(&self) -> &[Vec<AntId>] {
        &self.lanes
    }

    /// Ants assigned to the path at position `idx` (empty if there are none).
    pub fn lane(&self, idx: usize) -> &[AntId] {
        self.lanes.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of ants assigned.
    pub fn num_ants(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_ants() == 0
    }
}

/// Assign each of the colony's ants to one of `paths`.
///
/// Ants are placed one at a time. Each ant starts at the first path and moves on
/// to the next one only while the current path's load is strictly greater than
/// the next path's; the last path always accepts. A path's load is the number
/// of rooms between its endpoints plus the number of ants already assigned to it.
/// The first ant follows the same rule as every other ant.
pub fn schedule_ants(colony: &Colony, paths: &PathSet) -> Assignment {
    let mut lanes: Vec<Vec<AntId>> = vec![Vec::new(); paths.len()];
    let Some(last) = paths.len().checked_sub(1) else {
        return Assignment::new(lanes);
    };
    let load = |lanes: &[Vec<AntId>], idx: usize| -> usize {
        paths.as_slice()[idx].interior().len() + lanes[idx].len()
    };

    for ant in 1..=colony.ants() {
        let mut idx = 0;
        while idx < last && load(&lanes, idx) > load(&lanes, idx + 1) {
            idx += 1;
        }
        log::trace!("ant {ant} takes path {idx}");
        lanes[idx].push(AntId(ant));
    }
    Assignment::new(lanes)
}

/// Number of rounds needed to move every assigned ant to the end room.
///
/// A lone ant needs one round per link on its path, and every ant queued behind it
/// on the same path adds one more round. The slowest path decides the total.
/// Collisions between paths that share rooms are not accounted for.
pub fn count_rounds(paths: &PathSet, assignment: &Assignment) -> usize {
    paths
        .iter()
        .enumerate()
        .map(|(idx, path)| (path.edge_len() + assignment.lane(idx).len()).saturating_sub(1))
        .max()
        .unwrap_or(0)
}
