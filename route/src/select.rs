use colored::Colorize;

use colony::Colony;

use crate::{count_rounds, schedule_ants, Assignment, Error, Path, PathSet};

/// A way of reducing the full list of paths to a set worth sending ants down.
pub trait PathSelectionStrategy {
    /// Short name for logging and reporting.
    fn name(&self) -> &'static str;

    /// Choose paths from `paths`, which must be in non-decreasing order of length.
    /// Fails with `EmptyInput` if `paths` is empty.
    fn select(&self, paths: &[Path], colony: &Colony) -> Result<PathSet, Error>;
}

/// Takes the shortest path, then every later path that shares
/// no interior room with anything already taken.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisjointGreedy;

impl PathSelectionStrategy for DisjointGreedy {
    fn name(&self) -> &'static str {
        "disjoint-greedy"
    }

    fn select(&self, paths: &[Path], _colony: &Colony) -> Result<PathSet, Error> {
        let (first, rest) = paths.split_first().ok_or(Error::EmptyInput)?;
        let mut selected = vec![first.clone()];
        for candidate in rest {
            if !selected.iter().any(|p| p.overlaps(candidate)) {
                selected.push(candidate.clone());
            }
        }
        Ok(selected.into())
    }
}

/// Takes the shortest path, then considers every later path of at most
/// `ants / 2` links. A candidate that overlaps nothing is added; one that overlaps
/// a selected path of different length replaces it in place; one that overlaps
/// a selected path of the same length is dropped.
///
/// Only the first overlapping path is compared, so the result can still
/// contain paths that share interior rooms.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedReplacement;

impl PathSelectionStrategy for BoundedReplacement {
    fn name(&self) -> &'static str {
        "bounded-replacement"
    }

    fn select(&self, paths: &[Path], colony: &Colony) -> Result<PathSet, Error> {
        let (first, rest) = paths.split_first().ok_or(Error::EmptyInput)?;
        let max_len = (colony.ants() / 2) as usize;
        let mut selected = vec![first.clone()];
        for candidate in rest {
            if candidate.edge_len() > max_len {
                continue;
            }
            match selected.iter().position(|p| p.overlaps(candidate)) {
                None => selected.push(candidate.clone()),
                Some(idx) if selected[idx].edge_len() != candidate.edge_len() => {
                    selected[idx] = candidate.clone();
                }
                Some(_) => (),
            }
        }
        Ok(selected.into())
    }
}

/// Every strategy `select_best_path_set` tries, in order of preference on ties.
pub const STRATEGIES: &[&dyn PathSelectionStrategy] = &[&DisjointGreedy, &BoundedReplacement];

/// The chosen paths, the ants assigned to them, and how many rounds that takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub paths: PathSet,
    pub assignment: Assignment,
    pub rounds: usize,
    /// name of the strategy that produced `paths`
    pub strategy: &'static str,
}

/// Run every strategy in [`STRATEGIES`] on `paths` and keep the one
/// needing the fewest rounds. Ties go to the earlier strategy.
pub fn select_best_path_set(paths: &[Path], colony: &Colony) -> Result<Solution, Error> {
    if paths.is_empty() {
        return Err(Error::NoPathFound);
    }

    let mut best: Option<Solution> = None;
    for strategy in STRATEGIES {
        let selected = strategy.select(paths, colony)?;
        let assignment = schedule_ants(colony, &selected);
        let rounds = count_rounds(&selected, &assignment);
        log::debug!(
            "{} selected {} paths, needing {} rounds",
            strategy.name().cyan(),
            selected.len(),
            rounds
        );
        if best.as_ref().map_or(true, |b| rounds < b.rounds) {
            best = Some(Solution {
                paths: selected,
                assignment,
                rounds,
                strategy: strategy.name(),
            });
        }
    }
    let best = best.ok_or(Error::NoPathFound)?;
    log::info!(
        "using {} with {} paths ({} rounds)",
        best.strategy.cyan(),
        best.paths.len(),
        best.rounds
    );
    Ok(best)
}
