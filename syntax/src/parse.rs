use anyhow::Result;

use crate::ast::Line;

#[derive(Debug, thiserror::Error)]
#[error("ParseError on line {line_no} '{line}': {msg}")]
pub struct Error {
    pub msg: String,
    /// byte offset into the input
    pub pos: usize,
    pub line_no: usize,
    pub line: String,
}

/// Parse the text of a colony file into its meaningful lines, in file order.
pub fn parse(text: &str) -> Result<Vec<Line<'_>>> {
    use combine::EasyParser;
    file::lines()
        .easy_parse(text)
        .map(|(lines, _remainder)| lines)
        .map_err(|e| {
            let pos = e.position.translate_position(text);
            // isolate the line in question:
            let before = &text[0..pos];
            let after = &text[pos..text.len()];
            let prefix: String = before.chars().rev().take_while(|&c| c != '\n').collect();
            let prefix: String = prefix.chars().rev().collect();
            let suffix: String = after.chars().take_while(|&c| c != '\n').collect();
            let line = prefix + &suffix;
            let line_no = before.matches('\n').count() + 1;
            // since converting combine's errors is a lifetime nightmare,
            // we just stringify the error before returning it.
            Error {
                pos,
                line_no,
                line,
                msg: format!("{}", e),
            }
            .into()
        })
}

/// The lines of a colony file that get echoed back before the moves:
/// everything except blank lines and comments (`##start` and `##end` are kept).
pub fn echo_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !line.starts_with('#') || is_command(line))
        .collect()
}

fn is_command(line: &str) -> bool {
    matches!(line.trim_end(), "##start" | "##end")
}

pub mod prelude {
    pub use combine::parser::char::{char, digit, string};
    pub use combine::parser::range::recognize;
    pub use combine::*;
}

pub mod util {

    use super::prelude::*;

    p! {
        inline_whitespace() -> (), {
            skip_many1(satisfy(|c: char| c.is_whitespace() && c != '\n'))
        }
    }

    p! {
        trailing_whitespace() -> (), {
            skip_many(satisfy(|c: char| c.is_whitespace() && c != '\n'))
        }
    }

    p! {
        eol() -> (), {
            eof().or(char('\n').map(|_| ()))
        }
    }

    // parser, followed by optional trailing whitespace and the end of the line.
    wrapper! {
        line(parser), {
            parser.skip(trailing_whitespace()).skip(eol())
        }
    }

    // room names can't contain whitespace, and '-' is reserved for links.
    p! {
        name() -> &'a str, {
            recognize(skip_many1(satisfy(|c: char| !c.is_whitespace() && c != '-')))
        }
    }

    p! {
        coord() -> i64, {
            recognize(optional(char('-')).and(skip_many1(digit())))
                .and_then(|s: &'a str| s.parse::<i64>())
        }
    }

}

mod item {

    use super::prelude::*;
    use super::util::{coord, inline_whitespace, line, name, trailing_whitespace};
    use crate::ast::{Line, Room};

    p! {
        blank() -> (), {
            attempt(trailing_whitespace().with(char('\n'))).map(|_| ())
        }
    }

    // anything starting with '#' that isn't a command is a comment:
    p! {
        comment() -> (), {
            line(char('#').with(skip_many(none_of("\n".chars()))))
        }
    }

    p! {
        command() -> Line<'a>, {
            choice!(
                attempt(line(string("##start"))).map(|_| Line::Start),
                attempt(line(string("##end"))).map(|_| Line::End)
            )
        }
    }

    p! {
        room() -> Line<'a>, {
            line(
                name()
                    .skip(inline_whitespace())
                    .and(coord())
                    .skip(inline_whitespace())
                    .and(coord())
            ).map(|((name, x), y)| Line::Room(Room { name, x, y }))
        }
    }

    p! {
        link() -> Line<'a>, {
            line(
                name().skip(char('-')).and(name())
            ).map(|(a, b)| Line::Link(a, b))
        }
    }

    p! {
        word() -> Line<'a>, {
            line(name()).map(Line::Word)
        }
    }

    p! {
        item() -> Option<Line<'a>>, {
            choice!(
                blank().map(|_| None),
                command().map(Some),
                comment().map(|_| None),
                attempt(room()).map(Some),
                attempt(link()).map(Some),
                word().map(Some)
            )
        }
    }

    #[cfg(test)]
    mod test {
        use crate::ast::Line;
        use anyhow::Result;
        use combine::EasyParser;
        #[test]
        fn test_room() -> Result<()> {
            assert_eq!(
                Line::room("start", 1, -2),
                super::room().easy_parse("start 1 -2").unwrap().0
            );
            assert_eq!(
                Line::room("r", 10, 20),
                super::room().easy_parse("r  10\t20 \n").unwrap().0
            );
            assert!(super::room().easy_parse("r 10").is_err());
            assert!(super::room().easy_parse("r 10 20 30").is_err());
            Ok(())
        }
        #[test]
        fn test_link() -> Result<()> {
            assert_eq!(
                Line::Link("a", "b2"),
                super::link().easy_parse("a-b2\n").unwrap().0
            );
            assert!(super::link().easy_parse("a-b-c").is_err());
            assert!(super::link().easy_parse("a-").is_err());
            Ok(())
        }
        #[test]
        fn test_command() -> Result<()> {
            assert_eq!(Some(Line::Start), super::item().easy_parse("##start\n").unwrap().0);
            assert_eq!(Some(Line::End), super::item().easy_parse("##end").unwrap().0);
            // unknown commands are comments:
            assert_eq!(None, super::item().easy_parse("##other\n").unwrap().0);
            assert_eq!(None, super::item().easy_parse("##starting\n").unwrap().0);
            Ok(())
        }
        #[test]
        fn test_word() -> Result<()> {
            assert_eq!(Some(Line::Word("12")), super::item().easy_parse("12\n").unwrap().0);
            Ok(())
        }
    }
}

mod file {
    use super::item::item;
    use super::prelude::*;
    use super::util::trailing_whitespace;
    use crate::ast::Line;

    p! {
        lines() -> Vec<Line<'a>>, {
            many(item())
                .skip(trailing_whitespace())
                .skip(eof())
                .map(|items: Vec<Option<Line<'a>>>| items.into_iter().flatten().collect())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SUBJECT: &str = "\
3
##start
start 1 0
# a comment
mid 2 0
##end
end 3 0

start-mid
mid-end
";

    #[test]
    fn test_parse() -> Result<()> {
        let lines = parse(SUBJECT)?;
        assert_eq!(
            vec![
                Line::Word("3"),
                Line::Start,
                Line::room("start", 1, 0),
                Line::room("mid", 2, 0),
                Line::End,
                Line::room("end", 3, 0),
                Line::Link("start", "mid"),
                Line::Link("mid", "end"),
            ],
            lines
        );
        Ok(())
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse("3\nroom 1\n").unwrap_err();
        let err = err.downcast::<Error>().unwrap();
        assert_eq!("room 1", err.line);
        assert_eq!(2, err.line_no);
    }

    #[test]
    fn test_echo_lines() {
        assert_eq!(
            vec![
                "3",
                "##start",
                "start 1 0",
                "mid 2 0",
                "##end",
                "end 3 0",
                "start-mid",
                "mid-end"
            ],
            echo_lines(SUBJECT)
        );
    }
}
