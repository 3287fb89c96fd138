use anyhow::Result;
use std::io::Write;

use colony::Colony;
use route::{Round, Schedule};

/// Write the lines of the colony file back out, followed by a blank line.
pub fn write_echo<W: Write>(out: &mut W, lines: &[&str]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write one line per round. Rounds with no moves are written as empty lines.
pub fn write_schedule<W: Write>(out: &mut W, colony: &Colony, schedule: &Schedule) -> Result<()> {
    let mut line = String::with_capacity(64);
    for round in schedule {
        format_round(colony, round, &mut line)?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Format a round as `L<ant>-<room>` moves separated by spaces, into `buf`.
fn format_round(colony: &Colony, round: &Round, buf: &mut String) -> Result<()> {
    use std::fmt::Write;
    buf.clear();
    for (i, mv) in round.iter().enumerate() {
        if i > 0 {
            buf.push(' ');
        }
        write!(buf, "L{}-{}", mv.ant, colony.room_name(mv.room)?)?;
    }
    Ok(())
}
