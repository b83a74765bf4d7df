use crate::difficulty::Difficulty;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) const USAGE: &str = "\
Usage: snakebite [<options>]

Play snake in the terminal.

Options:
  -c, --config <PATH>        Read configuration from the given file
  -d, --difficulty <LEVEL>   Start on the given difficulty (beginner,
                             intermediate, or advanced)
      --no-sound             Do not ring the terminal bell on eating
  -h, --help                 Display this help message and exit
  -V, --version              Show the program version and exit
";

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Play(Arguments),
    Help,
    Version,
}

/// Command-line settings that override the configuration file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) no_sound: bool,
}

impl Invocation {
    pub(crate) fn from_env() -> Result<Invocation, lexopt::Error> {
        Invocation::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('d') | Arg::Long("difficulty") => {
                    args.difficulty = Some(parser.value()?.parse()?);
                }
                Arg::Long("no-sound") => args.no_sound = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Play(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Invocation, lexopt::Error> {
        Invocation::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(
            parse(&[]).expect("should parse"),
            Invocation::Play(Arguments::default())
        );
    }

    #[test]
    fn all_options() {
        assert_eq!(
            parse(&["--config", "snake.toml", "-d", "Advanced", "--no-sound"])
                .expect("should parse"),
            Invocation::Play(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                difficulty: Some(Difficulty::Advanced),
                no_sound: true,
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Invocation::Help)]
    #[case(&["--difficulty", "beginner", "--help"], Invocation::Help)]
    #[case(&["-V"], Invocation::Version)]
    fn info_flags(#[case] args: &[&str], #[case] inv: Invocation) {
        assert_eq!(parse(args).expect("should parse"), inv);
    }

    #[rstest]
    #[case(&["--difficulty", "impossible"])]
    #[case(&["--difficulty"])]
    #[case(&["--speed", "9"])]
    #[case(&["extra"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
