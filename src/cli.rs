use lexopt::{Arg, Parser, ValueExt};
use log::LevelFilter;
use std::path::PathBuf;

pub(crate) static HELP: &str = "\
Usage: rocksnake [<options>]

Wraparound Snake with rocks.  Eat the food, avoid yourself & the rocks.

Options:
  -c, --config <path>     Read configuration from the given file
      --log-file <path>   Write log messages to the given file
      --log-level <level> Log messages at this level & above [off, error,
                          warn, info, debug, trace]
  -h, --help              Show this help message and exit
  -V, --version           Show the program version and exit
";

/// What the program was asked to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliCommand {
    Run(Arguments),
    Help,
    Version,
}

/// Options for playing the game
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) log_level: Option<LevelFilter>,
}

impl CliCommand {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-level") => {
                    args.log_level = Some(parser.value()?.parse()?);
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(args))
    }
}
