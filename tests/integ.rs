use anyhow::Result;
use lemin::{App, Args};
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

const THREE_ANTS: &str = "\
3
##start
A 0 0
# the only way through
B 1 0
##end
C 2 0
A-B
B-C
";

const TWO_PATHS: &str = "\
4
##start
start 0 0
room1 1 1
room2 1 -1
room3 2 1
##end
end 3 0
start-room1
start-room2
room1-room3
room2-end
room3-end
";

fn basic_args(file: &std::path::Path) -> Args {
    Args {
        file: file.to_str().unwrap().to_owned(),
        verbose: 0,
        moves_only: false,
        summary: false,
    }
}

fn write_colony(dir: &TempDir, text: &str) -> Result<PathBuf> {
    let path = dir.path().join("colony.txt");
    std::fs::write(&path, text)?;
    Ok(path)
}

fn run_args(args: Args) -> Result<String> {
    let settings = args.try_into()?;
    let app = App::new(settings);
    let mut out = Vec::new();
    app.run_with_writer(&mut out)?;
    Ok(String::from_utf8(out)?)
}

fn run_text(text: &str, moves_only: bool) -> Result<String> {
    let dir = tempdir()?;
    let path = write_colony(&dir, text)?;
    let mut args = basic_args(&path);
    args.moves_only = moves_only;
    let out = run_args(args)?;
    dir.close()?;
    Ok(out)
}

#[test]
fn test_single_path() -> Result<()> {
    let out = run_text(THREE_ANTS, false)?;
    let expected = "\
3
##start
A 0 0
B 1 0
##end
C 2 0
A-B
B-C

L1-B
L1-C L2-B
L2-C L3-B
L3-C
";
    assert_eq!(expected, out);
    Ok(())
}

#[test]
fn test_two_paths_moves_only() -> Result<()> {
    let out = run_text(TWO_PATHS, true)?;
    let expected = "\
L1-room2 L3-room1
L1-end L2-room2 L3-room3
L2-end L4-room2 L3-end
L4-end
";
    assert_eq!(expected, out);
    Ok(())
}

#[test]
fn test_verbose_summary_run() -> Result<()> {
    let dir = tempdir()?;
    let path = write_colony(&dir, TWO_PATHS)?;
    let mut args = basic_args(&path);
    args.verbose = 1;
    args.summary = true;
    args.moves_only = true;
    // progress and summary go to stderr; the moves are unchanged:
    let out = run_args(args)?;
    assert_eq!(4, out.lines().count());
    assert!(out.starts_with("L1-room2 L3-room1\n"));
    dir.close()?;
    Ok(())
}

#[test]
fn test_too_many_ants() -> Result<()> {
    let text = "4000000000\n##start\ns 0 0\n##end\ne 1 0\ns-e\n";
    let err = run_text(text, false).unwrap_err();
    assert!(format!("{err:#}").contains("too many ants"));
    Ok(())
}

#[test]
fn test_every_ant_arrives() -> Result<()> {
    let out = run_text(TWO_PATHS, true)?;
    let arrivals = out.split_whitespace().filter(|mv| mv.ends_with("-end")).count();
    assert_eq!(4, arrivals);
    Ok(())
}

#[test]
fn test_no_path_is_an_error() -> Result<()> {
    let text = "2\n##start\ns 0 0\na 1 0\n##end\ne 2 0\ns-a\n";
    let err = run_text(text, false).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.starts_with("invalid data format"), "{msg}");
    assert!(msg.contains("no path"), "{msg}");
    Ok(())
}

#[test]
fn test_invalid_input_is_an_error() -> Result<()> {
    for text in [
        "0\n##start\ns 0 0\n##end\ne 1 0\ns-e\n",
        "2\n##start\ns 0 0\n##end\ne 1 0\ns-x\n",
        "2\n##start\ns 0 0\ne 1 0\ns-e\n",
        "2\n##start\ns 0 0\n##end\ne 0 0\ns-e\n",
        "2\n##start\nLs 0 0\n##end\ne 1 0\nLs-e\n",
        "2\n##start\ns 0 0\n##end\ne 1 0\ns e\n",
    ] {
        let err = run_text(text, false).unwrap_err();
        assert!(format!("{err:#}").starts_with("invalid data format"), "{text}");
    }
    Ok(())
}

#[test]
fn test_missing_file() -> Result<()> {
    let dir = tempdir()?;
    let args = basic_args(&dir.path().join("nope.txt"));
    let settings: Result<lemin::Settings> = args.try_into();
    assert!(settings.is_err());

    let args = basic_args(dir.path());
    let settings: Result<lemin::Settings> = args.try_into();
    assert!(settings.is_err());
    Ok(())
}
