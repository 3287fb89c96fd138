//!
//! The functions in this mod find a way to move every ant in a `Colony`
//! from the entrance to the exit in as few rounds as possible.
//!
//! A solution is created in 4 steps:
//! 1. Enumerate every simple path from start to end, shortest first (BFS over partial paths).
//! 2. Reduce the full list to a small set of paths. Several greedy strategies compete,
//!    and the one whose set needs the fewest rounds wins.
//! 3. Assign each ant to one of the chosen paths, keeping the paths' loads balanced.
//! 4. Expand the paths and assignment into the literal moves made in each round.
//!
//! None of this is guaranteed optimal; the path selection is greedy and never backtracks.

/// Path and PathSet types
mod path;
pub use path::{Path, PathDisplay, PathSet};

/// BFS enumeration of all simple paths
mod bfs;
pub use bfs::{enumerate_paths, PathEnumerator};

/// competing strategies for choosing which paths to use
mod select;
pub use select::{
    select_best_path_set, BoundedReplacement, DisjointGreedy, PathSelectionStrategy, Solution,
    STRATEGIES,
};

/// distributing ants across chosen paths
mod schedule;
pub use schedule::{count_rounds, schedule_ants, AntId, Assignment};

/// turning an assignment into per-round moves
mod simulate;
pub use simulate::{simulate, Move, Round, Schedule};

use colony::Colony;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("no path from start to end")]
    NoPathFound,
    #[error("no candidate paths to select from")]
    EmptyInput,
    #[error("inconsistent assignment: {0}")]
    InconsistentAssignment(String),
}

/// Run the whole pipeline on `colony`: enumerate paths, select the best set,
/// assign ants to it, and simulate their moves.
pub fn solve(colony: &Colony) -> Result<(Solution, Schedule), Error> {
    let paths = enumerate_paths(colony);
    log::debug!("found {} paths from start to end", paths.len());
    let solution = select_best_path_set(&paths, colony)?;
    let schedule = simulate(&solution.paths, &solution.assignment, solution.rounds)?;
    Ok((solution, schedule))
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_solve_single_path() -> Result<()> {
        let colony = Colony::from_links(3, "A", "C", &[("A", "B"), ("B", "C")])?;
        let (solution, schedule) = solve(&colony)?;
        assert_eq!(1, solution.paths.len());
        assert_eq!(4, solution.rounds);
        assert_eq!(4, schedule.len());
        assert_eq!(6, schedule.num_moves());
        Ok(())
    }

    #[test]
    fn test_solve_no_path() -> Result<()> {
        let colony = Colony::from_links(3, "s", "e", &[("s", "a"), ("b", "e")])?;
        assert!(enumerate_paths(&colony).is_empty());
        assert_eq!(Error::NoPathFound, solve(&colony).unwrap_err());
        Ok(())
    }

    #[test]
    fn test_solve_multiple_paths() -> Result<()> {
        let colony = Colony::from_links(
            4,
            "start",
            "end",
            &[
                ("start", "room1"),
                ("start", "room2"),
                ("room1", "room3"),
                ("room2", "end"),
                ("room3", "end"),
            ],
        )?;
        let (solution, schedule) = solve(&colony)?;
        let paths = solution
            .paths
            .iter()
            .map(|p| p.display(&colony).to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            vec!["start -> room2 -> end", "start -> room1 -> room3 -> end"],
            paths
        );
        assert_eq!(4, solution.rounds);
        assert_eq!(4, schedule.len());
        // every ant ends up in the end room exactly once:
        let arrivals = schedule
            .iter()
            .flatten()
            .filter(|mv| mv.room == colony.end())
            .count();
        assert_eq!(4, arrivals);
        Ok(())
    }
}
