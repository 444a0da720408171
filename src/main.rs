mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::{Board, Game};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use log::LevelFilter;
use ratatui::layout::Size;
use std::io::{self, ErrorKind};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: termsnake [<options>]

Play snake in the terminal

Options:
  -c, --config <FILE>     Read match settings from the given JSON file
      --log-file <FILE>   Write log messages to the given file
      --log-level <LEVEL> Minimum level of log messages to write [default: info]
  -h, --help              Display this help message and exit
  -V, --version           Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    opts.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => opts.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("log-level") => opts.log_level = parser.value()?.parse()?,
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> ExitCode {
        match self {
            Command::Run(opts) => opts.run(),
            Command::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Command::Version => {
                println!("termsnake {}", env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Options {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_level: LevelFilter,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            config: None,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Options {
    fn run(self) -> ExitCode {
        let game = match self.init_logging().and_then(|()| self.new_game()) {
            Ok(game) => game,
            Err(e) => {
                log::error!("{e:#}");
                eprintln!("termsnake: {e:#}");
                return ExitCode::FAILURE;
            }
        };
        let terminal = ratatui::init();
        let r = catch_unwind(AssertUnwindSafe(|| App::new(game).run(terminal)));
        ratatui::restore();
        match r {
            Ok(r) => io_exit(r),
            Err(_) => {
                log::error!("Game loop panicked");
                ExitCode::from(3)
            }
        }
    }

    fn init_logging(&self) -> anyhow::Result<()> {
        if let Some(ref path) = self.log_file {
            let file = fs_err::File::create(path).context("failed to open log file")?;
            simplelog::WriteLogger::init(self.log_level, simplelog::Config::default(), file)
                .context("failed to initialize logger")?;
            log::info!("termsnake {} starting", env!("CARGO_PKG_VERSION"));
        }
        Ok(())
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        if let Some(ref path) = self.config {
            return Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display()));
        }
        match Config::default_path() {
            Ok(path) => Config::load(&path, true)
                .with_context(|| format!("failed to load configuration from {}", path.display())),
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Ok(Config::default())
            }
        }
    }

    fn new_game(&self) -> anyhow::Result<Game> {
        let config = self.load_config()?;
        log::debug!("Configuration: {config:?}");
        let (cols, rows) =
            crossterm::terminal::size().context("failed to determine terminal size")?;
        let board = Board::for_terminal(Size::new(cols, rows)).context("terminal is too small")?;
        log::debug!(
            "Terminal is {cols}x{rows}; board spans {:?} to {:?}",
            board.upper_left(),
            board.lower_right()
        );
        Ok(Game::new(config, board))
    }
}

fn main() -> ExitCode {
    match Command::from_parser(Parser::from_env()) {
        Ok(cmd) => cmd.run(),
        Err(e) => {
            eprintln!("termsnake: {e}");
            ExitCode::from(2)
        }
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("termsnake: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(Options::default()));
    }

    #[test]
    fn all_options() {
        assert_eq!(
            parse(&[
                "-c",
                "snake.json",
                "--log-file",
                "snake.log",
                "--log-level=debug"
            ])
            .unwrap(),
            Command::Run(Options {
                config: Some(PathBuf::from("snake.json")),
                log_file: Some(PathBuf::from("snake.log")),
                log_level: LevelFilter::Debug,
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Command::Help)]
    #[case(&["--help"], Command::Help)]
    #[case(&["--config", "foo.json", "--help"], Command::Help)]
    #[case(&["-V"], Command::Version)]
    #[case(&["--version"], Command::Version)]
    fn info_flags(#[case] args: &[&str], #[case] cmd: Command) {
        assert_eq!(parse(args).unwrap(), cmd);
    }

    #[rstest]
    #[case(&["--log-level", "loud"])]
    #[case(&["--config"])]
    #[case(&["--bogus"])]
    #[case(&["extra"])]
    fn usage_errors(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
