mod app;
mod command;
mod config;
mod consts;
mod game;
mod gameover;
mod highscores;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::highscores::HighScores;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use lexopt::{Arg, Parser};
use std::borrow::Cow;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

static USAGE: &str = "\
Usage: toxsnake [<options>]

Play Snake in the terminal.  Eat the apples, avoid the skull, and don't run
into yourself.

Options:
  -c, --config <FILE>             Read configuration from <FILE>
  -f, --high-scores-file <FILE>   Load & save high scores at <FILE>
      --log-file <FILE>           Write log messages to <FILE>
      --show-scores               Print the high scores and exit
      --reset-scores              Clear the high scores and exit
  -h, --help                      Display this help message and exit
  -V, --version                   Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('f') | Arg::Long("high-scores-file") => {
                    args.high_scores_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("show-scores") => args.action = Action::ShowScores,
                Arg::Long("reset-scores") => args.action = Action::ResetScores,
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    high_scores_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    action: Action,
}

impl Arguments {
    fn run(self) -> ExitCode {
        match self.try_run() {
            Ok(code) => code,
            Err(e) => {
                tracing::error!(error = ?e, "Fatal error");
                eprintln!("toxsnake: {e:?}");
                ExitCode::FAILURE
            }
        }
    }

    fn try_run(self) -> anyhow::Result<ExitCode> {
        if let Some(ref path) = self.log_file {
            init_tracing(path)?;
        }
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting up");
        let config = self.load_config()?;
        let high_scores_file = self
            .high_scores_file
            .or_else(|| config.high_scores_file().map(Cow::into_owned));
        let (mut high_scores, save_to) = open_high_scores(high_scores_file.clone());
        match self.action {
            Action::Play => {
                let app = App::new(config.settings(), high_scores, save_to);
                Ok(io_exit(play(app)))
            }
            Action::ShowScores => {
                for score in high_scores.get() {
                    println!("{score}");
                }
                Ok(ExitCode::SUCCESS)
            }
            Action::ResetScores => {
                let path = high_scores_file.context("saving high scores is disabled")?;
                high_scores.reset();
                high_scores.save(&path)?;
                tracing::info!(path = %path.display(), "Reset high scores");
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        if let Some(ref path) = self.config {
            return Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display()));
        }
        let path = match Config::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "Using default configuration");
                return Ok(Config::default());
            }
        };
        Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display()))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Action {
    #[default]
    Play,
    ShowScores,
    ResetScores,
}

fn main() -> ExitCode {
    match Mode::from_parser(Parser::from_env()) {
        Ok(Mode::Run(args)) => args.run(),
        Ok(Mode::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Mode::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("toxsnake: {e}\n\n{USAGE}");
            ExitCode::FAILURE
        }
    }
}

/// Run a play session in the terminal, then report how it went once the
/// terminal has been restored
fn play(app: App) -> io::Result<()> {
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableFocusChange).and_then(|()| app.run(terminal));
    let _ = execute!(io::stdout(), DisableFocusChange);
    ratatui::restore();
    if let Some(ending) = r? {
        ending.report();
    }
    Ok(())
}

/// Load the high scores stored at `path`, if any.  Returns the scores along
/// with the file to save them to at the end of the session.  If the file
/// exists but could not be read, the latter is `None` so that the scores
/// already in it are not overwritten.
fn open_high_scores(path: Option<PathBuf>) -> (HighScores, Option<PathBuf>) {
    let mut high_scores = HighScores::default();
    let Some(path) = path else {
        return (high_scores, None);
    };
    match high_scores.load(&path) {
        Ok(()) => tracing::info!(
            path = %path.display(),
            count = high_scores.get().len(),
            "Loaded high scores"
        ),
        Err(e) if e.is_not_found() => {
            tracing::debug!(path = %path.display(), "No high scores file yet");
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = ?anyhow::Error::new(e),
                "Could not read high scores; they will not be saved this session"
            );
            return (high_scores, None);
        }
    }
    (high_scores, Some(path))
}

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to create log file")?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::from_boxed)
        .context("failed to initialize logging")
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
