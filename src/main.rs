use clap::{Args, Parser, Subcommand, ValueEnum};
use std::{cmp::Ordering, path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use verstamp::prelude::*;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("{0}")]
    Date(#[from] DateError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Program(#[from] ProgramError),

    #[error("{failed} of {total} file(s) could not be injected")]
    InjectFailed { failed: usize, total: usize },

    #[error("`git tag {tag}` exited with code {code}")]
    TagFailed { tag: String, code: i32 },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum LevelArg {
    Major,
    Minor,
    Patch,
}

impl From<LevelArg> for SemLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Major => SemLevel::Major,
            LevelArg::Minor => SemLevel::Minor,
            LevelArg::Patch => SemLevel::Patch,
        }
    }
}

/// The date to stamp. Defaults to the current UTC date.
#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
struct DateArg {
    /// [DATE PROVIDER] Use the current UTC date. Exclusive with other date providers.
    #[arg(long)]
    utc: bool,

    /// [DATE PROVIDER] Use the current local date. Exclusive with other date providers.
    #[arg(long)]
    local: bool,

    /// [DATE PROVIDER] Use a date in format `YYYY-MM-DD`. Exclusive with other date providers.
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,
}

impl DateArg {
    fn to_date(&self) -> Result<Date, CliError> {
        // multiple is false, so at most one of these is set
        if let Some(date) = &self.date {
            return Ok(date.parse()?);
        }
        if self.local {
            return Ok(Date::local_now());
        }
        Ok(Date::utc_now())
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the version store
    #[arg(short, long, global = true, env = "VERSTAMP_DIR", default_value = ".")]
    dir: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Saves `VERSION` as the stored version, replacing any previous one
    Init {
        /// The version to store, such as `v1.0` or `2.9.1-beta`
        version: String,
    },

    /// Prints the stored version
    Show,

    /// Bumps the stored version at `LEVEL` and prints the result.
    ///
    /// Bumping a level resets every lower level to zero. Bumping the patch level of a version
    /// without one adds it.
    Bump {
        /// The level to bump
        #[arg(value_enum)]
        level: LevelArg,

        /// How much to bump by
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        amount: i64,

        /// Also create a git tag named after the bumped version
        #[arg(long)]
        tag: bool,
    },

    /// Prints `<`, `=` or `>` as `A` is lower than, equal to, or greater than `B`
    Compare {
        /// Left-hand version
        a: String,

        /// Right-hand version
        b: String,
    },

    /// Stamps a version into the line below each version marker in `FILES`
    InjectVersion {
        /// Files to stamp. Each one is stamped or left untouched independently.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// The version to stamp. Defaults to the stored version.
        #[arg(long)]
        version: Option<String>,

        /// Marker designating the line below it
        #[arg(short, long, default_value = VersionInjector::DEFAULT_MARKER)]
        marker: String,
    },

    /// Stamps a date into the line below each date marker in `FILES`.
    ///
    /// # Date Providers
    ///
    /// Use one of `--utc`, `--local`, or `--date YYYY-MM-DD`. Omit them to use the current UTC
    /// date.
    InjectDate {
        /// Files to stamp. Each one is stamped or left untouched independently.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        date: DateArg,

        /// strftime pattern the date is rendered with
        #[arg(short, long, env = "VERSTAMP_DATE_FORMAT", default_value = DateFormat::DEFAULT)]
        format: String,

        /// Marker designating the line below it
        #[arg(short, long, default_value = DateInjector::DEFAULT_MARKER)]
        marker: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("verstamp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("verstamp=info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match do_work(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn do_work(cli: Cli) -> Result<String, CliError> {
    let store = VersionStore::new(&cli.dir);

    match cli.command {
        Commands::Init { version } => {
            let version = Version::parse(&version)?;
            store.save(&version)?;
            info!(path = %store.path().display(), "initialized version store");
            Ok(version.to_string())
        }
        Commands::Show => Ok(store.load()?.to_string()),
        Commands::Bump { level, amount, tag } => {
            let mut version = store.load()?;
            let bumped = version.bump(level.into(), amount)?;
            store.save(&version)?;
            if tag {
                create_tag(&bumped)?;
            }
            Ok(bumped)
        }
        Commands::Compare { a, b } => {
            let ordering = Version::parse(&a)?.cmp(&Version::parse(&b)?);
            Ok(match ordering {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            }
            .to_owned())
        }
        Commands::InjectVersion {
            files,
            version,
            marker,
        } => {
            let version = match version {
                Some(version) => Version::parse(&version)?,
                None => store.load()?,
            };
            let injector = VersionInjector::new(&version).with_marker(marker);
            inject_all(&files, &injector)
        }
        Commands::InjectDate {
            files,
            date,
            format,
            marker,
        } => {
            let format = DateFormat::new(format)?;
            let injector = DateInjector::new(&date.to_date()?, &format).with_marker(marker);
            inject_all(&files, &injector)
        }
    }
}

/// Injects into every file, carrying on past failures.
fn inject_all(files: &[PathBuf], strategy: &dyn Substitute) -> Result<String, CliError> {
    let mut report = Vec::with_capacity(files.len());
    let mut failed = 0;

    for path in files {
        match inject_file(path, strategy) {
            Ok(substituted) => report.push(format!("{}: {substituted}", path.display())),
            Err(e) => {
                error!(path = %path.display(), "{e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::InjectFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(report.join("\n"))
}

fn create_tag(tag: &str) -> Result<(), CliError> {
    let git = Program::new("git", Some("Git"))?;
    git.exists(true)?;
    git.runnable(true, &[])?;

    let code = git.execute(&["tag", tag], None, None)?;
    if code != 0 {
        return Err(CliError::TagFailed {
            tag: tag.to_owned(),
            code,
        });
    }
    info!(tag, "created git tag");
    Ok(())
}
