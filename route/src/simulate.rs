use colony::RoomId;
use util::HashSet;

use crate::{AntId, Assignment, Error, PathSet};

/// One ant entering one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub ant: AntId,
    pub room: RoomId,
}

/// Every move made during a single round, ordered by path position,
/// then by the order ants entered that path.
pub type Round = Vec<Move>;

/// The moves made in each round, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    rounds: Vec<Round>,
}

impl Schedule {
    /// Number of rounds, including any with no moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Round> {
        self.rounds.iter()
    }

    /// Total number of moves across all rounds.
    pub fn num_moves(&self) -> usize {
        self.rounds.iter().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Round;
    type IntoIter = std::slice::Iter<'a, Round>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}

/// Expand `paths` and `assignment` into the moves made in each of `rounds` rounds.
///
/// The `j`th ant on a path enters the path's `k`th room (not counting the start room)
/// in round `j + k`. Moves that would land past the last round are dropped.
/// Fails if the assignment uses a path position `paths` doesn't have,
/// or doesn't number its ants exactly `1..=n`.
pub fn simulate(paths: &PathSet, assignment: &Assignment, rounds: usize) -> Result<Schedule, Error> {
    check_assignment(paths, assignment)?;

    let mut schedule: Vec<Round> = vec![Vec::new(); rounds];
    for (path, lane) in paths.iter().zip(assignment.lanes()) {
        for (j, &ant) in lane.iter().enumerate() {
            for (k, &room) in path.rooms().iter().skip(1).enumerate() {
                match schedule.get_mut(j + k) {
                    Some(round) => round.push(Move { ant, room }),
                    None => log::warn!("dropping move of ant {ant} past round {rounds}"),
                }
            }
        }
    }
    Ok(Schedule { rounds: schedule })
}

fn check_assignment(paths: &PathSet, assignment: &Assignment) -> Result<(), Error> {
    if let Some((idx, _)) = assignment
        .lanes()
        .iter()
        .enumerate()
        .skip(paths.len())
        .find(|(_, lane)| !lane.is_empty())
    {
        return Err(Error::InconsistentAssignment(format!(
            "ants assigned to path {idx}, but there are only {} paths",
            paths.len()
        )));
    }

    let num_ants = assignment.num_ants();
    let mut seen = HashSet::with_capacity_and_hasher(num_ants, Default::default());
    for &AntId(ant) in assignment.lanes().iter().flatten() {
        if ant == 0 || ant as usize > num_ants {
            return Err(Error::InconsistentAssignment(format!(
                "ant {ant} is outside 1..={num_ants}"
            )));
        }
        if !seen.insert(ant) {
            return Err(Error::InconsistentAssignment(format!(
                "ant {ant} is assigned more than once"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{count_rounds, enumerate_paths, schedule_ants};
    use anyhow::Result;
    use colony::Colony;

    fn ants(ids: &[u32]) -> Vec<AntId> {
        ids.iter().copied().map(AntId).collect()
    }

    fn render(colony: &Colony, schedule: &Schedule) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for round in schedule {
            let mut moves = Vec::new();
            for mv in round {
                moves.push(format!("L{}-{}", mv.ant, colony.room_name(mv.room)?));
            }
            lines.push(moves.join(" "));
        }
        Ok(lines)
    }

    #[test]
    fn test_single_path() -> Result<()> {
        let colony = Colony::from_links(
            3,
            "start",
            "end",
            &[("start", "1"), ("1", "2"), ("2", "end")],
        )?;
        let paths: PathSet = enumerate_paths(&colony).into();
        let assignment = Assignment::new(vec![ants(&[1, 2, 3])]);
        let schedule = simulate(&paths, &assignment, 5)?;
        assert_eq!(
            vec!["L1-1", "L1-2 L2-1", "L1-end L2-2 L3-1", "L2-end L3-2", "L3-end"],
            render(&colony, &schedule)?
        );
        Ok(())
    }

    #[test]
    fn test_rounds_ordered_by_path_then_lane() -> Result<()> {
        let colony = Colony::from_links(
            4,
            "s",
            "e",
            &[("s", "a"), ("a", "e"), ("s", "b"), ("b", "c"), ("c", "e")],
        )?;
        let paths: PathSet = enumerate_paths(&colony).into();
        let assignment = schedule_ants(&colony, &paths);
        let rounds = count_rounds(&paths, &assignment);
        let schedule = simulate(&paths, &assignment, rounds)?;
        assert_eq!(
            vec!["L1-a L3-b", "L1-e L2-a L3-c", "L2-e L4-a L3-e", "L4-e"],
            render(&colony, &schedule)?
        );
        Ok(())
    }

    #[test]
    fn test_move_count() -> Result<()> {
        let colony = Colony::from_links(
            9,
            "s",
            "e",
            &[("s", "a"), ("a", "e"), ("s", "b"), ("b", "c"), ("c", "e")],
        )?;
        let paths: PathSet = enumerate_paths(&colony).into();
        let assignment = schedule_ants(&colony, &paths);
        let rounds = count_rounds(&paths, &assignment);
        let schedule = simulate(&paths, &assignment, rounds)?;
        assert_eq!(rounds, schedule.len());
        let expected: usize = paths
            .iter()
            .enumerate()
            .map(|(i, p)| p.edge_len() * assignment.lane(i).len())
            .sum();
        assert_eq!(expected, schedule.num_moves());
        Ok(())
    }

    #[test]
    fn test_empty_rounds_are_kept() -> Result<()> {
        let colony = Colony::from_links(0, "A", "C", &[("A", "B"), ("B", "C")])?;
        let paths: PathSet = enumerate_paths(&colony).into();
        let assignment = schedule_ants(&colony, &paths);
        let schedule = simulate(&paths, &assignment, 2)?;
        assert_eq!(2, schedule.len());
        assert_eq!(0, schedule.num_moves());

        let schedule = simulate(&paths, &assignment, 0)?;
        assert!(schedule.is_empty());
        Ok(())
    }

    #[test]
    fn test_moves_past_last_round_are_dropped() -> Result<()> {
        let colony = Colony::from_links(2, "A", "C", &[("A", "B"), ("B", "C")])?;
        let paths: PathSet = enumerate_paths(&colony).into();
        let assignment = Assignment::new(vec![ants(&[1, 2])]);
        let schedule = simulate(&paths, &assignment, 2)?;
        assert_eq!(2, schedule.len());
        assert_eq!(vec!["L1-B", "L1-C L2-B"], render(&colony, &schedule)?);
        Ok(())
    }

    #[test]
    fn test_inconsistent_assignment() -> Result<()> {
        let colony = Colony::from_links(2, "A", "C", &[("A", "B"), ("B", "C")])?;
        let paths: PathSet = enumerate_paths(&colony).into();

        let extra_lane = Assignment::new(vec![ants(&[1]), ants(&[2])]);
        assert!(matches!(
            simulate(&paths, &extra_lane, 3),
            Err(Error::InconsistentAssignment(_))
        ));

        let gap = Assignment::new(vec![ants(&[1, 3])]);
        assert!(matches!(
            simulate(&paths, &gap, 3),
            Err(Error::InconsistentAssignment(_))
        ));

        let dup = Assignment::new(vec![ants(&[1, 1])]);
        assert!(matches!(
            simulate(&paths, &dup, 3),
            Err(Error::InconsistentAssignment(_))
        ));

        // trailing empty lanes are harmless:
        let trailing = Assignment::new(vec![ants(&[1, 2]), ants(&[])]);
        assert_eq!(3, simulate(&paths, &trailing, 3)?.len());
        Ok(())
    }
}
