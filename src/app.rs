use anyhow::{Context, Result};
use std::io::{self, Write};

use colony::Colony;
use route::{Schedule, Solution};
use syntax::ast;

use crate::settings::Settings;
use crate::ui::Ui;
use crate::{fs, output};

/// Context for every error caused by the contents of the colony file.
const INVALID_DATA: &str = "invalid data format";

/// This struct actually runs the command-line app.
pub struct App {
    /// Interpreted command line settings
    settings: Settings,
    /// User interface
    ui: Ui,
}

impl App {
    /// Create a new `App`.
    pub fn new(settings: Settings) -> Self {
        let ui = Ui::new(&settings);
        Self { settings, ui }
    }

    /// Run the app, writing the moves to stdout.
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        self.run_with_writer(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Run the app, writing the moves (and, unless `--moves-only` was given,
    /// the echoed colony description) to `out`.
    pub fn run_with_writer<W: Write>(mut self, out: &mut W) -> Result<()> {
        let mut strbuf = String::with_capacity(0); // will be resized later.
        self.read_colony_to_buf(&mut strbuf)?;
        let colony = self.load_colony(&strbuf)?;
        let (solution, schedule) = self.solve(&colony)?;

        if !self.settings.moves_only {
            output::write_echo(out, &syntax::echo_lines(&strbuf))?;
        }
        output::write_schedule(out, &colony, &schedule)?;

        if self.settings.summary {
            self.ui.print_summary(&colony, &solution);
        }
        Ok(())
    }
}

// PARSING //////////////////
impl App {
    fn read_colony_to_buf(&mut self, strbuf: &mut String) -> Result<()> {
        self.ui
            .verbose_progress_debug("Reading colony file", &self.settings.input);
        fs::read_to_buf(&self.settings.input, strbuf)
            .with_context(|| format!("while reading colony file {:?}", self.settings.input))?;
        self.ui.done();
        Ok(())
    }

    fn parse_colony<'a>(&mut self, text: &'a str) -> Result<Vec<ast::Line<'a>>> {
        self.ui.verbose_progress("Parsing colony file");
        self.ui.start_timer();
        let lines = syntax::parse(text).context(INVALID_DATA)?;
        self.ui.done();
        self.ui.print_elapsed("Parsing colony file");
        Ok(lines)
    }

    fn load_colony(&mut self, text: &str) -> Result<Colony> {
        let lines = self.parse_colony(text)?;

        self.ui.verbose_progress("Creating colony");
        self.ui.start_timer();
        let colony = Colony::load(lines).context(INVALID_DATA)?;
        self.ui.done();
        self.ui.print_elapsed("Creating colony");

        self.ui.verbose_msg(&format!(
            "Created colony with {} ants, {} rooms and {} links.",
            colony.ants(),
            colony.num_rooms(),
            colony.num_links()
        ));
        Ok(colony)
    }
}

// ROUTING /////////////////
impl App {
    fn solve(&mut self, colony: &Colony) -> Result<(Solution, Schedule)> {
        self.ui.verbose_progress("Routing ants");
        self.ui.start_timer();
        let solved = route::solve(colony).context(INVALID_DATA)?;
        self.ui.done();
        self.ui.print_elapsed("Routing ants");
        Ok(solved)
    }
}
