use colored::Colorize;

use colony::Colony;
use route::Solution;
use util::Timer;

use crate::settings::Settings;

/// All interactions with the text UI (other than the moves themselves)
/// should go through this struct. Everything here goes to stderr.
pub struct Ui {
    /// -v setting, displays extra text info to user
    pub verbose: bool,
    /// keeps track of time for each step
    timer: Timer,
}

impl Ui {
    pub fn new(settings: &Settings) -> Self {
        Self {
            verbose: settings.verbose > 0,
            timer: Timer::now(),
        }
    }

    pub fn start_timer(&mut self) {
        if self.verbose {
            self.timer.reset();
        }
    }

    pub fn print_elapsed(&self, task: &str) {
        if self.verbose {
            self.timer.print_elapsed(task);
        }
    }

    pub fn verbose_msg(&self, msg: &str) {
        if self.verbose {
            eprintln!("{}", msg);
        }
    }

    pub fn verbose_progress(&self, msg: &str) {
        if self.verbose {
            eprint!("{}... ", msg.magenta());
        }
    }

    pub fn verbose_progress_debug<T: std::fmt::Debug>(&self, msg: &str, arg: T) {
        if self.verbose {
            eprint!("{} {:?}... ", msg.magenta(), arg);
        }
    }

    pub fn done(&self) {
        if self.verbose {
            eprintln!("{}.", "done".green());
        }
    }

    /// Describe the chosen solution: strategy, paths with their ants, and round count.
    pub fn print_summary(&self, colony: &Colony, solution: &Solution) {
        eprintln!(
            "{} {} {}",
            "Strategy".cyan(),
            solution.strategy,
            format!("({} paths)", solution.paths.len()).dimmed()
        );
        for (idx, path) in solution.paths.iter().enumerate() {
            let ants = solution.assignment.lane(idx).len();
            eprintln!("  [{ants:>3} ants] {}", path.display(colony));
        }
        eprintln!("{} {}", "Rounds".cyan(), solution.rounds.to_string().green());
    }
}
