use colored::Colorize;
use std::collections::VecDeque;

use colony::{Colony, RoomId};

use crate::Path;

const QUEUE_CAPACITY: usize = 32;

/// Breadth-first enumeration of every simple path from start to end.
/// The queue holds partial paths rather than single rooms,
/// so completed paths come out shortest first.
pub struct PathEnumerator<'a> {
    /// colony info
    colony: &'a Colony,
    /// partial paths waiting to be extended
    queue: VecDeque<Vec<RoomId>>,
    /// completed paths, in discovery order
    found: Vec<Path>,
}

impl<'a> PathEnumerator<'a> {
    pub fn new(colony: &'a Colony) -> Self {
        Self {
            colony,
            queue: VecDeque::with_capacity(QUEUE_CAPACITY),
            found: Vec::with_capacity(colony.num_rooms()),
        }
    }

    /// Consume this struct and return the completed paths.
    pub fn into_paths(self) -> Vec<Path> {
        self.found
    }

    /// Run the search to completion.
    pub fn enumerate(&mut self) {
        self.queue.push_back(vec![self.colony.start()]);
        while let Some(partial) = self.queue.pop_front() {
            self.handle(partial);
        }
    }

    /// Handle a single partial path popped off the queue.
    fn handle(&mut self, partial: Vec<RoomId>) {
        let Some(&last) = partial.last() else {
            return;
        };
        if last == self.colony.end() {
            let path = Path::new(partial);
            if log::log_enabled!(log::Level::Trace) {
                log::trace!("found path {}", path.display(self.colony).to_string().cyan());
            }
            self.found.push(path);
            return;
        }
        let colony = self.colony;
        for &next in colony.neighbors(last) {
            if !partial.contains(&next) {
                self.enqueue(&partial, next);
            }
        }
    }

    fn enqueue(&mut self, partial: &[RoomId], next: RoomId) {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "extending path of {} rooms to {}",
                partial.len(),
                self.colony.room_name(next).unwrap_or("?"),
            );
        }
        let mut extended = Vec::with_capacity(partial.len() + 1);
        extended.extend_from_slice(partial);
        extended.push(next);
        self.queue.push_back(extended);
    }
}

/// Find every simple path from the colony's start room to its end room,
/// in non-decreasing order of length. Empty if the end is unreachable.
pub fn enumerate_paths(colony: &Colony) -> Vec<Path> {
    let mut enumerator = PathEnumerator::new(colony);
    enumerator.enumerate();
    enumerator.into_paths()
}
